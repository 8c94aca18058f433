//! Error types for TeenyHost.

use thiserror::Error;

/// Common error type for TeenyHost.
#[derive(Error, Debug)]
pub enum TeenyhostError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File storage error.
    #[error("storage error: {0}")]
    Storage(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for TeenyHost operations.
pub type Result<T> = std::result::Result<T, TeenyhostError>;
