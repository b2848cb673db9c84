//! Media tool module for probing and remuxing video files.
//!
//! This module provides the `MediaTool` trait and an FFmpeg-based
//! implementation. Two operations are exposed:
//!
//! - `probe`: inspect a file's stream layout (codec kind, resolution)
//!   without decoding frame data.
//! - `remux_faststart`: rewrite the container metadata to the front of the
//!   file (`-movflags faststart`) with a stream copy, so players can start
//!   playback before the whole file is downloaded. No re-encoding.
//!
//! # Example
//!
//! ```ignore
//! use vidvault_core::media::{FfmpegTool, MediaTool};
//!
//! let tool = FfmpegTool::with_defaults();
//! tool.validate().await?;
//!
//! tool.remux_faststart(Path::new("/tmp/in.mp4"), Path::new("/tmp/out.mp4")).await?;
//! let probe = tool.probe(Path::new("/tmp/out.mp4")).await?;
//! let orientation = probe.orientation()?;
//! ```

mod config;
mod error;
mod ffmpeg;
mod traits;
mod types;

pub use config::MediaToolConfig;
pub use error::MediaToolError;
pub use ffmpeg::FfmpegTool;
pub use traits::MediaTool;
pub use types::{Orientation, ProbeResult, StreamInfo};
