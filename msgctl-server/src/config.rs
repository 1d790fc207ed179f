//! Database configuration - connection parameters and environment loading
//!
//! Configuration is loaded from environment variables:
//! - `DB_HOST`: Database host (no default)
//! - `DB_PORT`: Database port (default: 5432)
//! - `DB_NAME`: Database name (default: postgres)
//! - `DB_USER`: Database user (default: postgres)
//! - `DB_PASSWORD`: Database password (no default)
//!
//! Nothing is validated here. A missing host or password ends up as an empty
//! segment of the connection string and fails when the pool first connects.

use std::fmt;

const DEFAULT_PORT: &str = "5432";
const DEFAULT_NAME: &str = "postgres";
const DEFAULT_USER: &str = "postgres";

/// Database connection descriptor
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: Option<String>,
    pub port: String,
    pub name: String,
    pub user: String,
    pub password: Option<String>,
}

impl DbConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup (for testing)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: lookup("DB_HOST"),
            port: lookup("DB_PORT").unwrap_or_else(|| DEFAULT_PORT.to_string()),
            name: lookup("DB_NAME").unwrap_or_else(|| DEFAULT_NAME.to_string()),
            user: lookup("DB_USER").unwrap_or_else(|| DEFAULT_USER.to_string()),
            password: lookup("DB_PASSWORD"),
        }
    }

    /// PostgreSQL connection string
    pub fn database_url(&self) -> String {
        self.format_url(self.password.as_deref().unwrap_or_default())
    }

    /// Connection string with the password masked, safe for logs
    pub fn redacted_url(&self) -> String {
        self.format_url(if self.password.is_some() { "***" } else { "" })
    }

    fn format_url(&self, password: &str) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.user,
            password,
            self.host.as_deref().unwrap_or_default(),
            self.port,
            self.name
        )
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}
