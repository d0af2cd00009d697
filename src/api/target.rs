use reqwest::Url;

use crate::credentials::Credentials;
use crate::error::CommandError;

pub const DEFAULT_PORT: u16 = 8091;

/// Where a command is sent and who it authenticates as.
#[derive(Debug, Clone)]
pub struct Target {
    /// Host as the user typed it, used in messages.
    pub host: String,
    pub base_url: Url,
    pub credentials: Credentials,
}

impl Target {
    pub fn new(host: &str, port: Option<u16>, credentials: Credentials) -> Result<Self, CommandError> {
        let host = host.trim();
        Ok(Self {
            host: host.to_string(),
            base_url: base_url(host, port)?,
            credentials,
        })
    }

    pub fn url_for(&self, path: &str) -> Result<Url, CommandError> {
        self.base_url
            .join(path)
            .map_err(|e| CommandError::InvalidHost {
                host: self.host.clone(),
                reason: e.to_string(),
            })
    }

    /// `host:port` as the cluster keys its node status map.
    pub fn node_key(&self) -> String {
        format!(
            "{}:{}",
            self.base_url.host_str().unwrap_or_default(),
            self.base_url.port_or_known_default().unwrap_or(DEFAULT_PORT)
        )
    }
}

/// Accepts `node.local`, `10.0.0.1`, `node.local:9000` or a full
/// `http(s)://node.local:8091` URL. An explicit `port` wins over one in the
/// host string; with neither the administration port is 8091.
pub fn base_url(host: &str, port: Option<u16>) -> Result<Url, CommandError> {
    let invalid = |reason: String| CommandError::InvalidHost {
        host: host.to_string(),
        reason,
    };

    if host.is_empty() {
        return Err(invalid("empty host".to_string()));
    }

    let raw = if host.contains("://") {
        host.to_string()
    } else {
        format!("http://{}", host)
    };

    let mut url = Url::parse(&raw).map_err(|e| invalid(e.to_string()))?;
    if url.host_str().is_none() {
        return Err(invalid("missing host name".to_string()));
    }

    let port = port.or(url.port()).unwrap_or(DEFAULT_PORT);
    url.set_port(Some(port))
        .map_err(|_| invalid("cannot set port".to_string()))?;
    url.set_path("/");
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}
