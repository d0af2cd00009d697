use anyhow::Result;

use crate::credentials;

pub fn run(user: &str, password: &str) -> Result<()> {
    credentials::store_credentials(user, password)?;
    println!("Default credentials stored for {}.", user);
    Ok(())
}
