//! Error types shared by the services
//!
//! Every failure that originates in the relational store is reported as a
//! [`DatabaseError`]. "Row not found" is never one of them: repositories
//! report absence as a value.

use sqlx::Error as SqlxError;
use sqlx::migrate::MigrateError;
use thiserror::Error;

/// Custom error type for database operations
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Opening a connection to the store failed
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// A statement was rejected or could not be executed
    #[error("Database query error: {0}")]
    Query(#[source] SqlxError),

    /// Applying the embedded schema migrations failed
    #[error("Database migration error: {0}")]
    Migration(#[source] MigrateError),

    /// Configuration error
    #[error("Database configuration error: {0}")]
    Configuration(String),
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;
