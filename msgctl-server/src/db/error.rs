//! Database error classification
//!
//! Every failure keeps the underlying sqlx message as its display text.
//! The variant only records which class of failure it was.

use sqlx::error::ErrorKind;

/// SQLSTATE for a value too long for its column (e.g. author > 100 chars)
const STRING_DATA_RIGHT_TRUNCATION: &str = "22001";

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Could not reach the database or obtain a connection
    #[error("{0}")]
    Connection(#[source] sqlx::Error),

    /// A table constraint rejected the row
    #[error("{0}")]
    ConstraintViolation(#[source] sqlx::Error),

    /// Any other failure while running a statement
    #[error("{0}")]
    Query(#[source] sqlx::Error),
}

impl DbError {
    /// Short machine-readable class name
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Connection(_) => "connection",
            Self::ConstraintViolation(_) => "constraint_violation",
            Self::Query(_) => "query",
        }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::Connection(e),
            sqlx::Error::Database(db) => {
                let constraint = matches!(
                    db.kind(),
                    ErrorKind::UniqueViolation
                        | ErrorKind::ForeignKeyViolation
                        | ErrorKind::NotNullViolation
                        | ErrorKind::CheckViolation
                ) || db.code().as_deref() == Some(STRING_DATA_RIGHT_TRUNCATION);

                if constraint {
                    Self::ConstraintViolation(e)
                } else {
                    Self::Query(e)
                }
            }
            _ => Self::Query(e),
        }
    }
}
