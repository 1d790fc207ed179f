//! Message repository
//!
//! Insert and full-table scan. Each call checks out its own connection.

use sqlx::{FromRow, PgPool};

use crate::db::DbError;

/// Message record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Message {
    pub id: i32,
    pub author: Option<String>,
    pub content: String,
}

/// Message repository
pub struct MessageRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> MessageRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a message and return its generated id.
    ///
    /// The insert runs in its own transaction. On failure it is rolled back
    /// before the error is returned; the connection goes back to the pool
    /// when `tx` is dropped either way.
    pub async fn create(&self, author: Option<&str>, content: &str) -> Result<i32, DbError> {
        let mut tx = self.pool.begin().await?;

        let inserted: Result<i32, sqlx::Error> = sqlx::query_scalar(
            r#"
            INSERT INTO messages (author, content)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(author)
        .bind(content)
        .fetch_one(&mut *tx)
        .await;

        let id = match inserted {
            Ok(id) => id,
            Err(e) => {
                if let Err(rollback) = tx.rollback().await {
                    tracing::warn!(error = %rollback, "rollback failed");
                }
                return Err(e.into());
            }
        };

        tx.commit().await?;
        Ok(id)
    }

    /// Every stored message, in whatever order the database returns them.
    pub async fn list_all(&self) -> Result<Vec<Message>, DbError> {
        let messages = sqlx::query_as::<_, Message>("SELECT id, author, content FROM messages")
            .fetch_all(self.pool)
            .await?;

        Ok(messages)
    }
}
