//! Unified error type for report export.
//!
//! Empty datasets are not errors; they surface as a skipped export instead.
use thiserror::Error;

/// Main error type for export operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A row could not be turned into a flat record
    #[error("Invalid record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    /// File name that does not name a single entry inside the target directory
    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    /// The viewer is not allowed to export reports
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, Error>;
