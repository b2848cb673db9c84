//! Mock media tool for testing.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::media::{MediaTool, MediaToolError, ProbeResult, StreamInfo};

/// A recorded remux invocation for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedRemux {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Mock implementation of the MediaTool trait.
///
/// Remuxing copies the input file to the output path so downstream steps
/// see a real file. Probe responses report configurable dimensions.
pub struct MockMediaTool {
    probe_dimensions: Arc<RwLock<(u32, u32)>>,
    remuxes: Arc<RwLock<Vec<RecordedRemux>>>,
    probed_paths: Arc<RwLock<Vec<PathBuf>>>,
    next_error: Arc<RwLock<Option<MediaToolError>>>,
}

impl Default for MockMediaTool {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMediaTool {
    /// Create a mock reporting 1920x1080 video.
    pub fn new() -> Self {
        Self {
            probe_dimensions: Arc::new(RwLock::new((1920, 1080))),
            remuxes: Arc::new(RwLock::new(Vec::new())),
            probed_paths: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Set the dimensions reported by subsequent probes.
    pub async fn set_probe_dimensions(&self, width: u32, height: u32) {
        *self.probe_dimensions.write().await = (width, height);
    }

    /// Configure the next operation to fail with the given error.
    pub async fn set_next_error(&self, error: MediaToolError) {
        *self.next_error.write().await = Some(error);
    }

    /// Get all recorded remux invocations.
    pub async fn recorded_remuxes(&self) -> Vec<RecordedRemux> {
        self.remuxes.read().await.clone()
    }

    /// Get the number of remuxes performed.
    pub async fn remux_count(&self) -> usize {
        self.remuxes.read().await.len()
    }

    /// Get all paths passed to probe.
    pub async fn probed_paths(&self) -> Vec<PathBuf> {
        self.probed_paths.read().await.clone()
    }

    async fn take_error(&self) -> Option<MediaToolError> {
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl MediaTool for MockMediaTool {
    fn name(&self) -> &str {
        "mock"
    }

    async fn probe(&self, path: &Path) -> Result<ProbeResult, MediaToolError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.probed_paths.write().await.push(path.to_path_buf());

        let (width, height) = *self.probe_dimensions.read().await;
        Ok(ProbeResult {
            streams: vec![StreamInfo {
                kind: "video".to_string(),
                width: Some(width),
                height: Some(height),
                codec: Some("h264".to_string()),
            }],
        })
    }

    async fn remux_faststart(&self, input: &Path, output: &Path) -> Result<(), MediaToolError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        tokio::fs::copy(input, output).await?;

        self.remuxes.write().await.push(RecordedRemux {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
        });
        Ok(())
    }

    async fn validate(&self) -> Result<(), MediaToolError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::Orientation;

    #[tokio::test]
    async fn test_probe_reports_configured_dimensions() {
        let tool = MockMediaTool::new();
        tool.set_probe_dimensions(1080, 1920).await;

        let probe = tool.probe(Path::new("/tmp/whatever.mp4")).await.unwrap();
        assert_eq!(probe.orientation().unwrap(), Orientation::Portrait);
        assert_eq!(tool.probed_paths().await.len(), 1);
    }

    #[tokio::test]
    async fn test_remux_copies_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.mp4");
        let output = dir.path().join("out.mp4");
        tokio::fs::write(&input, b"fake video bytes").await.unwrap();

        let tool = MockMediaTool::new();
        tool.remux_faststart(&input, &output).await.unwrap();

        assert_eq!(
            tokio::fs::read(&output).await.unwrap(),
            b"fake video bytes"
        );
        assert_eq!(tool.remux_count().await, 1);
    }

    #[tokio::test]
    async fn test_error_injection_is_consumed() {
        let tool = MockMediaTool::new();
        tool.set_next_error(MediaToolError::NoVideoStream).await;

        assert!(tool.probe(Path::new("/tmp/x.mp4")).await.is_err());
        assert!(tool.probe(Path::new("/tmp/x.mp4")).await.is_ok());
    }
}
