mod api;
mod cli;
mod commands;
mod credentials;
mod error;
mod models;
mod output;
mod session;
mod shell;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

use api::client::ClusterClient;
use output::Line;
use session::Session;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Auth { user, password }) => commands::auth::run(&user, &password),
        Some(Commands::Cluster(command)) => {
            let mut session = Session::new(ClusterClient::new()?, credentials::load_credentials());
            let lines = commands::execute(&mut session, &command).await;
            for line in &lines {
                line.print();
            }
            check_lines(&lines, command_name(&command))
        }
        None => {
            let session = Session::new(ClusterClient::new()?, credentials::load_credentials());
            shell::run(session).await
        }
    }
}

/// One-shot mode fails when the command printed any error line.
fn check_lines(lines: &[Line], name: &str) -> Result<()> {
    if lines.iter().any(Line::is_error) {
        anyhow::bail!("{} failed", name);
    }
    Ok(())
}

fn command_name(command: &cli::ClusterCommand) -> &'static str {
    use cli::ClusterCommand::*;
    match command {
        Addn(_) => "addn",
        Bckt(_) => "bckt",
        Ejct(_) => "ejct",
        Flvr(_) => "flvr",
        Info(_) => "info",
        Init(_) => "init",
        Name(_) => "name",
        Rebl(_) => "rebl",
        Svcs(_) => "svcs",
        User(_) => "user",
        Vers(_) => "vers",
    }
}
