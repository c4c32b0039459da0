//! Common error types for Folio

use thiserror::Error;

/// Common result type for Folio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the Folio crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Remote data fetch failed (wraps reqwest::Error)
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Data document could not be parsed as JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Data document parsed but does not have the year-keyed shape
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
