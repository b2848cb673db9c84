//! Trait definitions for the media tool module.

use async_trait::async_trait;
use std::path::Path;

use super::error::MediaToolError;
use super::types::ProbeResult;

/// A narrow capability over an external media tool: probe and remux.
///
/// Both operations are pure functions from input path(s) to a result; they
/// never mutate the input file.
#[async_trait]
pub trait MediaTool: Send + Sync {
    /// Returns the name of this tool implementation.
    fn name(&self) -> &str;

    /// Probes a media file and returns its stream layout.
    async fn probe(&self, path: &Path) -> Result<ProbeResult, MediaToolError>;

    /// Copy-remuxes `input` into `output` with streaming-optimized metadata
    /// placement (faststart). The input file is left untouched.
    async fn remux_faststart(&self, input: &Path, output: &Path) -> Result<(), MediaToolError>;

    /// Validates that the tool is properly configured and ready.
    async fn validate(&self) -> Result<(), MediaToolError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::types::StreamInfo;

    struct StaticTool;

    #[async_trait]
    impl MediaTool for StaticTool {
        fn name(&self) -> &str {
            "static"
        }

        async fn probe(&self, _path: &Path) -> Result<ProbeResult, MediaToolError> {
            Ok(ProbeResult {
                streams: vec![StreamInfo {
                    kind: "video".to_string(),
                    width: Some(1920),
                    height: Some(1080),
                    codec: Some("h264".to_string()),
                }],
            })
        }

        async fn remux_faststart(
            &self,
            _input: &Path,
            _output: &Path,
        ) -> Result<(), MediaToolError> {
            Ok(())
        }

        async fn validate(&self) -> Result<(), MediaToolError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_trait_object_probe() {
        let tool: Box<dyn MediaTool> = Box::new(StaticTool);
        let probe = tool.probe(Path::new("/test.mp4")).await.unwrap();
        assert_eq!(probe.streams.len(), 1);
        assert_eq!(probe.streams[0].kind, "video");
    }
}
