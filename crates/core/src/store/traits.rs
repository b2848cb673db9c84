//! Trait definitions for the object store module.

use async_trait::async_trait;
use std::path::Path;

use super::error::StoreError;

/// A remote key-addressed object store.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Returns the name of this store implementation.
    fn name(&self) -> &str;

    /// Streams the file at `path` to the store under `key` with the given
    /// content type. Creates or overwrites exactly one remote object; the
    /// file is never buffered whole in memory.
    async fn put_file(&self, path: &Path, key: &str, content_type: &str)
        -> Result<(), StoreError>;

    /// Composes the public retrieval URL for a key.
    fn object_url(&self, key: &str) -> String;
}
