use thiserror::Error;

/// Failures detected before, or instead of, a usable cluster response.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0} option required")]
    MissingOption(&'static str),

    #[error("invalid host {host}: {reason}")]
    InvalidHost { host: String, reason: String },

    #[error("unexpected response from {path}: {source}")]
    Decode {
        path: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
