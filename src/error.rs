//! Error types for the shulker tracker.

use thiserror::Error;

/// Main error type for tracker operations.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Malformed record line: {reason}")]
    MalformedLine { reason: String },

    #[error("Page {page} out of range (1-{total_pages})")]
    InvalidPage { page: i64, total_pages: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown config key: {0}")]
    ConfigKeyNotFound(String),
}

impl From<serde_json::Error> for TrackerError {
    fn from(e: serde_json::Error) -> Self {
        TrackerError::Serialization(e.to_string())
    }
}

/// Result type for tracker operations.
pub type Result<T> = std::result::Result<T, TrackerError>;
