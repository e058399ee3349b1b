//! Common error types for jobtrack

use thiserror::Error;

/// Common result type for jobtrack operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the jobtrack crates
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Host already holds a database opened with different settings
    #[error("Configuration conflict: {0}")]
    ConfigConflict(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Foreign key or uniqueness constraint rejected by the store
    #[error("Integrity violation: {0}")]
    Integrity(String),
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_foreign_key_violation() || db_err.is_unique_violation() {
                return Error::Integrity(db_err.message().to_string());
            }
        }
        Error::Database(err)
    }
}
