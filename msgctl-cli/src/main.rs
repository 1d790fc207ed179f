//! msgctl CLI - entry point for the messages HTTP service
//!
//! - `serve`: ensure the messages table, then run the HTTP server
//! - `migrate`: ensure the messages table and exit
//!
//! Connection parameters come from `DB_HOST`, `DB_PORT`, `DB_NAME`,
//! `DB_USER` and `DB_PASSWORD`, optionally loaded from `./.env`.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "msgctl",
    author,
    version,
    about = "Minimal PostgreSQL-backed messages API"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server (health check, add message, list messages)
    Serve(commands::serve::ServeArgs),
    /// Create the messages table if it does not exist, then exit
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before anything reads the environment; existing vars win
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    match dotenv {
        Ok(path) => tracing::debug!("Loaded .env from {}", path.display()),
        Err(e) if e.not_found() => tracing::debug!("No .env file found"),
        Err(e) => tracing::warn!("Failed to load .env: {}", e),
    }

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
        Commands::Migrate => commands::migrate::run_migrate().await,
    }
}
