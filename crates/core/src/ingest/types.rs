use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the ingestion pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Directory for spooling uploads and remux output. Defaults to the
    /// system temp directory.
    #[serde(default)]
    pub spool_dir: Option<PathBuf>,
}

impl IngestConfig {
    pub fn spool_dir(&self) -> PathBuf {
        self.spool_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir)
    }
}
