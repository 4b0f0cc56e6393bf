use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod probe_cmd;
mod status_cmd;

#[derive(Parser)]
#[command(name = "dbcheck", about = "dbcheck CLI - database connectivity status")]
struct Cli {
    /// dbcheck server URL
    #[arg(long, env = "DBCHECK_URL", default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the server for the database status once and print it
    Status,

    /// Probe the database directly using the DB_* environment
    Probe,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let connected = match cli.command {
        Commands::Status => status_cmd::run(&cli.url).await.is_connected(),
        Commands::Probe => probe_cmd::run().await?,
    };

    Ok(if connected {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
