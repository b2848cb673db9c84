//! Configuration for the media tool module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the FFmpeg-based media tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaToolConfig {
    /// Path to ffmpeg binary.
    #[serde(default = "default_ffmpeg_path")]
    pub ffmpeg_path: PathBuf,

    /// Path to ffprobe binary.
    #[serde(default = "default_ffprobe_path")]
    pub ffprobe_path: PathBuf,

    /// Timeout for a single tool invocation in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// FFmpeg log level (quiet, panic, fatal, error, warning, info, verbose, debug).
    #[serde(default = "default_log_level")]
    pub ffmpeg_log_level: String,
}

fn default_ffmpeg_path() -> PathBuf {
    PathBuf::from("ffmpeg")
}

fn default_ffprobe_path() -> PathBuf {
    PathBuf::from("ffprobe")
}

fn default_timeout() -> u64 {
    600 // a remux is a stream copy, not a re-encode
}

fn default_log_level() -> String {
    "error".to_string()
}

impl Default for MediaToolConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: default_ffmpeg_path(),
            ffprobe_path: default_ffprobe_path(),
            timeout_secs: default_timeout(),
            ffmpeg_log_level: default_log_level(),
        }
    }
}

impl MediaToolConfig {
    /// Creates a new config with custom ffmpeg/ffprobe paths.
    pub fn with_paths(ffmpeg_path: PathBuf, ffprobe_path: PathBuf) -> Self {
        Self {
            ffmpeg_path,
            ffprobe_path,
            ..Default::default()
        }
    }

    /// Sets the timeout in seconds.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}
