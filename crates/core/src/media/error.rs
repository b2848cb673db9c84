//! Error types for the media tool module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while probing or remuxing media files.
#[derive(Debug, Error)]
pub enum MediaToolError {
    /// FFmpeg binary not found.
    #[error("FFmpeg not found at path: {path}")]
    FfmpegNotFound { path: PathBuf },

    /// FFprobe binary not found.
    #[error("FFprobe not found at path: {path}")]
    FfprobeNotFound { path: PathBuf },

    /// Input file not found.
    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    /// Remux process failed.
    #[error("Transcode failed: {reason}")]
    TranscodeFailed {
        reason: String,
        stderr: Option<String>,
    },

    /// Probe process failed or produced unparseable output.
    #[error("Failed to probe media file: {reason}")]
    ProbeFailed { reason: String },

    /// A video stream reported a zero width or height.
    #[error("Invalid video dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The file contains no video stream.
    #[error("No video stream found")]
    NoVideoStream,

    /// Tool invocation timed out.
    #[error("Media tool timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// I/O error while running a tool.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MediaToolError {
    /// Creates a new transcode failed error with stderr output.
    pub fn transcode_failed(reason: impl Into<String>, stderr: Option<String>) -> Self {
        Self::TranscodeFailed {
            reason: reason.into(),
            stderr,
        }
    }

    /// Creates a new probe failed error.
    pub fn probe_failed(reason: impl Into<String>) -> Self {
        Self::ProbeFailed {
            reason: reason.into(),
        }
    }
}
