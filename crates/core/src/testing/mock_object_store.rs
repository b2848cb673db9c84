//! Mock object store for testing.

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::store::{ObjectStore, StoreError};

/// A recorded put for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedPut {
    pub key: String,
    pub content_type: String,
    pub size_bytes: u64,
}

/// Mock implementation of the ObjectStore trait.
///
/// Records every put and composes URLs under a fixed fake base.
pub struct MockObjectStore {
    puts: Arc<RwLock<Vec<RecordedPut>>>,
    next_error: Arc<RwLock<Option<StoreError>>>,
}

impl Default for MockObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockObjectStore {
    pub fn new() -> Self {
        Self {
            puts: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Configure the next put to fail with the given error.
    pub async fn set_next_error(&self, error: StoreError) {
        *self.next_error.write().await = Some(error);
    }

    /// Get all recorded puts.
    pub async fn recorded_puts(&self) -> Vec<RecordedPut> {
        self.puts.read().await.clone()
    }

    /// Get the number of puts performed.
    pub async fn put_count(&self) -> usize {
        self.puts.read().await.len()
    }
}

#[async_trait]
impl ObjectStore for MockObjectStore {
    fn name(&self) -> &str {
        "mock"
    }

    async fn put_file(
        &self,
        path: &Path,
        key: &str,
        content_type: &str,
    ) -> Result<(), StoreError> {
        if let Some(err) = self.next_error.write().await.take() {
            return Err(err);
        }

        let size_bytes = tokio::fs::metadata(path).await?.len();
        self.puts.write().await.push(RecordedPut {
            key: key.to_string(),
            content_type: content_type.to_string(),
            size_bytes,
        });
        Ok(())
    }

    fn object_url(&self, key: &str) -> String {
        format!("https://mock.store.test/{}", key)
    }
}
