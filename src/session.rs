use crate::api::client::ClusterClient;
use crate::api::request::AdminRequest;
use crate::api::target::Target;
use crate::cli::ConnectionArgs;
use crate::credentials::Credentials;
use crate::error::CommandError;
use crate::output::Line;

/// State that outlives a single command: the HTTP client and the default
/// administrator credentials.
pub struct Session {
    pub client: ClusterClient,
    pub defaults: Credentials,
}

impl Session {
    pub fn new(client: ClusterClient, defaults: Credentials) -> Self {
        Self { client, defaults }
    }

    /// Resolve host, port and credentials; `-u`/`-p` override the defaults.
    pub fn target(&self, conn: &ConnectionArgs) -> Result<Target, CommandError> {
        let host = conn
            .host
            .as_deref()
            .filter(|h| !h.trim().is_empty())
            .ok_or(CommandError::MissingOption("-h"))?;

        let credentials = Credentials {
            user: conn.user.clone().unwrap_or_else(|| self.defaults.user.clone()),
            password: conn
                .pass
                .clone()
                .unwrap_or_else(|| self.defaults.password.clone()),
        };

        Target::new(host, conn.xport, credentials)
    }

    /// Build and send one request, turning the result into a single line.
    /// Nothing is sent when `build` rejects the flags.
    pub async fn submit<B, S>(&self, conn: &ConnectionArgs, build: B, success: S) -> Line
    where
        B: FnOnce(&Target) -> Result<AdminRequest, CommandError>,
        S: FnOnce(&Target) -> String,
    {
        let target = match self.target(conn) {
            Ok(target) => target,
            Err(e) => return e.into(),
        };
        let request = match build(&target) {
            Ok(request) => request,
            Err(e) => return e.into(),
        };

        match self.client.send(&target, &request).await {
            Ok(outcome) => outcome.into_line(&target.host, |_| success(&target)),
            Err(e) => e.into(),
        }
    }
}
