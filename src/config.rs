//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`), with defaults suitable for running
//! locally against a file-backed SQLite database.

use std::net::SocketAddr;

use anyhow::Context;

use crate::domain::DEFAULT_HISTORY_CAPACITY;

/// Top-level service configuration.
///
/// Loaded once at startup via [`AppConfig::from_env`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// SQLite connection string (e.g. `sqlite://players.db`).
    pub database_url: String,

    /// Maximum number of database connections in the pool.
    pub database_max_connections: u32,

    /// Timeout in seconds for acquiring a database connection.
    pub database_connect_timeout_secs: u64,

    /// Number of draw records retained in the in-process history.
    pub history_capacity: usize,

    /// Whether to seed the default roster when the table is empty.
    pub seed_defaults: bool,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .context("LISTEN_ADDR is not a valid socket address")?;

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://players.db".to_string());

        let database_max_connections = parse_env("DATABASE_MAX_CONNECTIONS", 5);
        let database_connect_timeout_secs = parse_env("DATABASE_CONNECT_TIMEOUT_SECS", 5);

        let history_capacity = parse_env("HISTORY_CAPACITY", DEFAULT_HISTORY_CAPACITY);
        let seed_defaults = parse_env_bool("SEED_DEFAULTS", true);

        Ok(Self {
            listen_addr,
            database_url,
            database_max_connections,
            database_connect_timeout_secs,
            history_capacity,
            seed_defaults,
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parses an environment variable as a boolean. Accepts `"true"`, `"1"`,
/// `"false"`, `"0"` (case-insensitive). Returns `default` otherwise.
fn parse_env_bool(key: &str, default: bool) -> bool {
    match std::env::var(key).ok().as_deref() {
        Some("true") | Some("TRUE") | Some("1") => true,
        Some("false") | Some("FALSE") | Some("0") => false,
        _ => default,
    }
}
