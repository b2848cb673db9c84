use thiserror::Error;
use uuid::Uuid;

use crate::catalog::CatalogError;
use crate::media::MediaToolError;
use crate::store::StoreError;

/// Errors raised by the ingestion pipeline.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The upload's declared media type is not accepted.
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// The target video record does not exist.
    #[error("Video not found: {0}")]
    NotFound(Uuid),

    /// The requester does not own the target video record.
    #[error("Video is owned by another user")]
    Forbidden,

    /// Buffering the upload to local disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Remux or probe failed.
    #[error(transparent)]
    Media(#[from] MediaToolError),

    /// Publishing the normalized file failed.
    #[error(transparent)]
    Publish(#[from] StoreError),

    /// Catalog read or write failed.
    #[error("Catalog error: {0}")]
    Catalog(String),
}

impl From<CatalogError> for IngestError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(id) => IngestError::NotFound(id),
            other => IngestError::Catalog(other.to_string()),
        }
    }
}
