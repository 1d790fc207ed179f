pub mod migrate;
pub mod serve;

use anyhow::{Context, Result};
use msgctl_server::db::{create_pool, schema, PgPool};
use msgctl_server::DbConfig;

/// Build the pool from `DB_*` variables and create the messages table.
///
/// Any failure here is fatal to the command.
async fn connect_and_ensure_schema() -> Result<PgPool> {
    let db = DbConfig::from_env();
    tracing::info!(database = %db.redacted_url(), "Connecting to database");

    let pool = create_pool(&db.database_url())
        .await
        .context("failed to connect to database")?;

    schema::ensure(&pool)
        .await
        .context("failed to create messages table")?;

    Ok(pool)
}
