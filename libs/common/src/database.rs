//! Database module for handling PostgreSQL connections
//!
//! Services built on this crate do not hold a pool. Every store operation
//! opens its own connection with [`connect`] and hands it back with
//! [`release`] once the statement has finished, whatever its outcome.

use crate::error::{DatabaseError, DatabaseResult};
use sqlx::migrate::Migrator;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{ConnectOptions, Connection};
use std::io;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Default time allowed for establishing a connection, in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Database configuration struct
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub database_url: String,
    /// Time allowed for establishing a connection
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    /// Create a configuration for the given connection URL with the default timeout
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    /// Override the connection timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Parse the connection URL into driver options
    pub fn connect_options(&self) -> DatabaseResult<PgConnectOptions> {
        PgConnectOptions::from_str(&self.database_url)
            .map(|options| options.disable_statement_logging())
            .map_err(|e| DatabaseError::Configuration(format!("Invalid database URL: {}", e)))
    }
}

/// Open a fresh connection to the store
///
/// # Arguments
///
/// * `config` - Database configuration
///
/// # Returns
///
/// * `DatabaseResult<PgConnection>` - A dedicated connection, to be handed back with [`release`]
pub async fn connect(config: &DatabaseConfig) -> DatabaseResult<PgConnection> {
    let options = config.connect_options()?;

    let conn = tokio::time::timeout(config.connect_timeout, options.connect())
        .await
        .map_err(|_| {
            DatabaseError::Connection(sqlx::Error::Io(io::Error::new(
                io::ErrorKind::TimedOut,
                "timed out while connecting to the database",
            )))
        })?
        .map_err(DatabaseError::Connection)?;

    debug!("Opened database connection");
    Ok(conn)
}

/// Close a connection opened with [`connect`]
///
/// A failed close is only logged: the statement that used the connection has
/// already produced its result and the socket is dropped either way.
pub async fn release(conn: PgConnection) {
    if let Err(e) = conn.close().await {
        warn!("Failed to close database connection cleanly: {}", e);
    }
}

/// Check database connectivity
///
/// # Arguments
///
/// * `config` - Database configuration
///
/// # Returns
///
/// * `bool` - True if a connection could be opened and answered `SELECT 1`
pub async fn health_check(config: &DatabaseConfig) -> bool {
    let mut conn = match connect(config).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("Database health check failed: {}", e);
            return false;
        }
    };

    let result = sqlx::query("SELECT 1").execute(&mut conn).await;
    release(conn).await;

    match result {
        Ok(_) => true,
        Err(e) => {
            error!("Database health check failed: {}", e);
            false
        }
    }
}

/// Apply the embedded migrations on a dedicated connection
pub async fn run_migrations(config: &DatabaseConfig, migrator: &Migrator) -> DatabaseResult<()> {
    info!("Running database migrations");

    let mut conn = connect(config).await?;
    let result = migrator.run(&mut conn).await;
    release(conn).await;

    result.map_err(DatabaseError::Migration)?;

    info!("Database migrations applied");
    Ok(())
}
