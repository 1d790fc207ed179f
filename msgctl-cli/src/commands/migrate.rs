//! Create the messages table and exit

use anyhow::Result;

/// Ensure the schema without starting the server
pub async fn run_migrate() -> Result<()> {
    let pool = super::connect_and_ensure_schema().await?;
    pool.close().await;

    tracing::info!("Schema is up to date");
    Ok(())
}
