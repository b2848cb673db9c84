//! Video catalog - the record store for video metadata.
//!
//! Each record carries an owner and an optional retrieval URL that the
//! ingestion pipeline fills in after a successful publish. Per-record
//! updates are applied atomically by the backing store.

mod sqlite;
mod types;

pub use sqlite::SqliteCatalog;
pub use types::*;

use uuid::Uuid;

/// Trait for video catalog storage.
pub trait VideoCatalog: Send + Sync {
    /// Create a new video record.
    fn create(&self, request: CreateVideoRequest) -> Result<Video, CatalogError>;

    /// Get a video record by id.
    fn get(&self, id: Uuid) -> Result<Video, CatalogError>;

    /// List video records owned by a user, newest first.
    fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Video>, CatalogError>;

    /// Update a video record's mutable fields (title, description, URLs).
    ///
    /// Returns the stored record after the update.
    fn update(&self, video: &Video) -> Result<Video, CatalogError>;

    /// Remove a video record.
    fn remove(&self, id: Uuid) -> Result<(), CatalogError>;
}
