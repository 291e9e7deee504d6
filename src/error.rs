//! Custom error types for pqcollect.
//!
//! All library functions return `Result<T, CollectError>` instead of using
//! `unwrap()`.

use thiserror::Error;

/// Main error type for collection operations.
///
/// Uses `thiserror` for ergonomic error handling and automatic `Display`
/// implementation.
#[derive(Debug, Error)]
pub enum CollectError {
    /// Network/HTTP transport error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Payload parsing error (HTML selectors, Atom scanning)
    #[error("Parse error: {0}")]
    Parse(String),

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias using `CollectError`
pub type Result<T> = std::result::Result<T, CollectError>;
