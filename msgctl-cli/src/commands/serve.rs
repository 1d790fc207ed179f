//! HTTP server command
//!
//! Connects to the database, ensures the messages table exists, then serves
//! until Ctrl+C or SIGTERM.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use msgctl_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "MSGCTL_BIND", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let pool = super::connect_and_ensure_schema().await?;

    tracing::info!("Starting msgctl server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Run server (blocks until shutdown, closes the pool on the way out)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
