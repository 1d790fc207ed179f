//! Table creation, run on every start

use sqlx::PgPool;

use super::DbError;

/// Create the messages table if it does not exist.
pub async fn ensure(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Ensuring messages table exists...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS messages (
            id SERIAL PRIMARY KEY,
            author VARCHAR(100),
            content TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Messages table ready");
    Ok(())
}
