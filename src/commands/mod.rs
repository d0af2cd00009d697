pub mod admin;
pub mod auth;
pub mod bucket;
pub mod info;
pub mod node;
pub mod rebalance;

use crate::cli::ClusterCommand;
use crate::error::CommandError;
use crate::output::Line;
use crate::session::Session;

/// Run one cluster command to completion and return what it printed.
pub async fn execute(session: &mut Session, command: &ClusterCommand) -> Vec<Line> {
    match command {
        ClusterCommand::Addn(args) => vec![node::add(session, args).await],
        ClusterCommand::Bckt(args) => vec![bucket::create(session, args).await],
        ClusterCommand::Ejct(args) => vec![node::eject(session, args).await],
        ClusterCommand::Flvr(args) => vec![node::fail_over(session, args).await],
        ClusterCommand::Info(args) => info::cluster_info(session, args).await,
        ClusterCommand::Init(args) => vec![node::initialize(session, args).await],
        ClusterCommand::Name(args) => vec![node::rename(session, args).await],
        ClusterCommand::Rebl(args) => vec![rebalance::run(session, args).await],
        ClusterCommand::Svcs(args) => vec![node::set_services(session, args).await],
        ClusterCommand::User(args) => vec![admin::set_administrator(session, args).await],
        ClusterCommand::Vers(args) => vec![info::version(session, args).await],
    }
}

/// A flag that must be present and non-blank.
fn required<'a>(value: &'a Option<String>, flag: &'static str) -> Result<&'a str, CommandError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(CommandError::MissingOption(flag))
}

/// Like `required`, but the value is kept byte for byte. Credentials end up
/// in the Basic auth header untouched, so the form must carry the same text.
fn required_exact<'a>(value: &'a Option<String>, flag: &'static str) -> Result<&'a str, CommandError> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or(CommandError::MissingOption(flag))
}

#[cfg(test)]
pub(crate) mod testing {
    use wiremock::MockServer;

    use crate::api::client::ClusterClient;
    use crate::cli::ConnectionArgs;
    use crate::credentials::Credentials;
    use crate::session::Session;

    pub fn session() -> Session {
        Session::new(ClusterClient::new().unwrap(), Credentials::default())
    }

    pub fn conn(server: &MockServer) -> ConnectionArgs {
        ConnectionArgs {
            host: Some(server.uri()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{required, required_exact};

    #[test]
    fn blank_flags_count_as_missing() {
        assert_eq!(required(&Some(" a ".to_string()), "-t").unwrap(), "a");
        assert!(required(&Some("  ".to_string()), "-t").is_err());
        assert_eq!(
            required(&None, "-k").unwrap_err().to_string(),
            "-k option required"
        );
    }

    #[test]
    fn exact_flags_keep_surrounding_spaces() {
        assert_eq!(
            required_exact(&Some(" pass word ".to_string()), "-p").unwrap(),
            " pass word "
        );
        assert!(required_exact(&Some(String::new()), "-p").is_err());
        assert!(required_exact(&None, "-u").is_err());
    }
}
