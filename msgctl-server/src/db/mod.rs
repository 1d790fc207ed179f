//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - One pool per process, injected into handlers - no globals
//! - Each operation checks out its own connection and releases it on return
//! - Writes run in a transaction that rolls back on failure

pub mod error;
pub mod pool;
pub mod repos;
pub mod schema;

pub use error::DbError;
pub use pool::{create_pool, ping, pool_options};
pub use repos::*;
pub use sqlx::PgPool;
