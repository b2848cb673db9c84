//! Error types for the object store module.

use thiserror::Error;

/// Errors that can occur while publishing objects.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Store client could not be constructed from the configuration.
    #[error("Invalid object store configuration: {0}")]
    Configuration(String),

    /// The store rejected or failed the write.
    #[error("Failed to publish object {key}: {reason}")]
    PublishFailed { key: String, reason: String },

    /// The store returned a non-success HTTP status.
    #[error("Object store returned status {status} for {key}")]
    UnexpectedStatus { key: String, status: u16 },

    /// Local I/O error while reading the source file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Creates a publish failed error.
    pub fn publish_failed(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PublishFailed {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
