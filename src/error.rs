//! Error types for the Markgate gateway.

use thiserror::Error;

/// Main error type for Markgate operations.
#[derive(Error, Debug)]
pub enum MarkgateError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Document serialization errors
    #[error("Document serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Admission wait aborted before a permit was granted
    #[error("Submission canceled while waiting for admission")]
    Canceled,

    /// Network or I/O failure with no response obtained
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Registry returned a non-success, non-401 status
    #[error("Registry rejected the document: HTTP {0}")]
    Rejected(reqwest::StatusCode),
}

/// Result type alias for Markgate operations.
pub type Result<T> = std::result::Result<T, MarkgateError>;
