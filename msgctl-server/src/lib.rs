//! msgctl-server: HTTP server for a single Postgres-backed messages table
//!
//! Three routes: a health check, add message and list messages.

pub mod config;
pub mod db;
pub mod http;

pub use config::DbConfig;
pub use db::{create_pool, DbError};
pub use http::{build_router, run_server, AppState, ServerConfig};
