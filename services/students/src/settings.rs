//! Service settings
//!
//! Values are layered: built-in defaults, then an optional `students.toml` in
//! the working directory, then environment variables (`DATABASE_URL`,
//! `LISTEN_ADDR`, `CONNECT_TIMEOUT_SECS`, `RUN_MIGRATIONS`).

use std::time::Duration;

use common::database::{DEFAULT_CONNECT_TIMEOUT_SECS, DatabaseConfig};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Address the HTTP server binds to when none is configured
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3001";

/// Settings for the students service
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Store connection string
    pub database_url: String,
    /// Time allowed for opening a store connection, in seconds
    pub connect_timeout_secs: u64,
    /// Socket address for the HTTP listener
    pub listen_addr: String,
    /// Apply the embedded schema migrations at startup
    pub run_migrations: bool,
}

impl Settings {
    /// Load settings from `students.toml` (if present) and the environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_sources("students")
    }

    fn from_sources(file_name: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("connect_timeout_secs", DEFAULT_CONNECT_TIMEOUT_SECS as i64)?
            .set_default("listen_addr", DEFAULT_LISTEN_ADDR)?
            .set_default("run_migrations", true)?
            .add_source(File::with_name(file_name).required(false))
            .add_source(Environment::default().try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Connection settings for the store
    pub fn database(&self) -> DatabaseConfig {
        DatabaseConfig::new(self.database_url.clone())
            .with_connect_timeout(Duration::from_secs(self.connect_timeout_secs))
    }
}
