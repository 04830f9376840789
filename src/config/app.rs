//! Server, storage, and lookup configuration.

use std::env;

/// Default number of history rows shown on the history page.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Top-level application configuration
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_address: String,
    /// Path of the SQLite history database
    pub database_path: String,
    /// Number of rows rendered by `/history`
    pub history_limit: usize,
    /// Maximum number of locations fetched concurrently within one batch
    pub lookup_concurrency: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            database_path: "weather_data.db".to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            lookup_concurrency: 4,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let bind_address = env::var("BIND_ADDRESS").unwrap_or(defaults.bind_address);

        let database_path = env::var("DATABASE_PATH").unwrap_or(defaults.database_path);

        let history_limit = env::var("HISTORY_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|limit: &usize| *limit > 0)
            .unwrap_or(defaults.history_limit);

        let lookup_concurrency = env::var("LOOKUP_CONCURRENCY")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|n: &usize| *n > 0)
            .unwrap_or(defaults.lookup_concurrency);

        Self {
            bind_address,
            database_path,
            history_limit,
            lookup_concurrency,
        }
    }
}
