use anyhow::{Context, Result};
use std::env;

const SERVICE: &str = "cbcluster";

pub const DEFAULT_USER: &str = "Administrator";
pub const DEFAULT_PASSWORD: &str = "couchbase";

/// Administrator credentials sent as HTTP Basic auth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            user: DEFAULT_USER.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

pub fn store_credentials(user: &str, password: &str) -> Result<()> {
    keyring::Entry::new(SERVICE, "user")
        .context("Failed to create keyring entry for user")?
        .set_password(user)
        .context("Failed to store user in keyring")?;

    keyring::Entry::new(SERVICE, "password")
        .context("Failed to create keyring entry for password")?
        .set_password(password)
        .context("Failed to store password in keyring")?;

    Ok(())
}

/// Default credentials for a shell session: environment, then keyring, then
/// the stock `Administrator`/`couchbase` pair.
pub fn load_credentials() -> Credentials {
    let from_env = (
        env::var("CBCLUSTER_USER").ok(),
        env::var("CBCLUSTER_PASSWORD").ok(),
    );
    let stored = match load_stored() {
        Ok(creds) => Some(creds),
        Err(e) => {
            tracing::debug!("no stored credentials: {:#}", e);
            None
        }
    };
    resolve(from_env, stored)
}

fn load_stored() -> Result<Credentials> {
    let user = keyring::Entry::new(SERVICE, "user")
        .context("Failed to access keyring")?
        .get_password()
        .context("user not found in keyring")?;

    let password = keyring::Entry::new(SERVICE, "password")
        .context("Failed to access keyring")?
        .get_password()
        .context("password not found in keyring")?;

    Ok(Credentials { user, password })
}

fn resolve(from_env: (Option<String>, Option<String>), stored: Option<Credentials>) -> Credentials {
    match from_env {
        (Some(user), Some(password)) => Credentials { user, password },
        _ => stored.unwrap_or_default(),
    }
}
