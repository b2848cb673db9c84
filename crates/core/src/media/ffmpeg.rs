//! FFmpeg-based media tool implementation.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use std::process::Output;
use tokio::process::Command;
use tokio::time::{timeout, Duration};
use tracing::debug;

use super::config::MediaToolConfig;
use super::error::MediaToolError;
use super::traits::MediaTool;
use super::types::{ProbeResult, StreamInfo};

/// FFmpeg-based media tool implementation.
pub struct FfmpegTool {
    config: MediaToolConfig,
}

impl FfmpegTool {
    /// Creates a new FFmpeg tool with the given configuration.
    pub fn new(config: MediaToolConfig) -> Self {
        Self { config }
    }

    /// Creates a tool with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(MediaToolConfig::default())
    }

    /// Parses ffprobe JSON output into a ProbeResult.
    fn parse_probe_output(output: &str) -> Result<ProbeResult, MediaToolError> {
        #[derive(Deserialize)]
        struct RawProbe {
            #[serde(default)]
            streams: Vec<RawStream>,
        }

        #[derive(Deserialize)]
        struct RawStream {
            codec_type: String,
            codec_name: Option<String>,
            width: Option<u32>,
            height: Option<u32>,
        }

        let raw: RawProbe = serde_json::from_str(output).map_err(|e| {
            MediaToolError::probe_failed(format!("failed to parse ffprobe output: {}", e))
        })?;

        Ok(ProbeResult {
            streams: raw
                .streams
                .into_iter()
                .map(|s| StreamInfo {
                    kind: s.codec_type,
                    width: s.width,
                    height: s.height,
                    codec: s.codec_name,
                })
                .collect(),
        })
    }

    /// Runs a tool subprocess with the configured timeout.
    ///
    /// The child is killed on drop, so a timeout or a cancelled request does
    /// not leave an orphaned process behind.
    async fn run_with_timeout(&self, mut command: Command) -> Result<Output, MediaToolError> {
        command.kill_on_drop(true);
        let timeout_duration = Duration::from_secs(self.config.timeout_secs);
        match timeout(timeout_duration, command.output()).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(MediaToolError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }),
        }
    }
}

#[async_trait]
impl MediaTool for FfmpegTool {
    fn name(&self) -> &str {
        "ffmpeg"
    }

    async fn probe(&self, path: &Path) -> Result<ProbeResult, MediaToolError> {
        if !path.exists() {
            return Err(MediaToolError::InputNotFound {
                path: path.to_path_buf(),
            });
        }

        let mut command = Command::new(&self.config.ffprobe_path);
        command
            .args(["-v", "error", "-print_format", "json", "-show_streams"])
            .arg(path);

        debug!(path = %path.display(), "probing media file");
        let output = self.run_with_timeout(command).await.map_err(|e| match e {
            MediaToolError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                MediaToolError::FfprobeNotFound {
                    path: self.config.ffprobe_path.clone(),
                }
            }
            other => other,
        })?;

        if !output.status.success() {
            return Err(MediaToolError::probe_failed(format!(
                "ffprobe failed: {}",
                String::from_utf8_lossy(&output.stderr)
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Self::parse_probe_output(&stdout)
    }

    async fn remux_faststart(&self, input: &Path, output: &Path) -> Result<(), MediaToolError> {
        if !input.exists() {
            return Err(MediaToolError::InputNotFound {
                path: input.to_path_buf(),
            });
        }

        let mut command = Command::new(&self.config.ffmpeg_path);
        command
            .arg("-y")
            .args(["-loglevel", &self.config.ffmpeg_log_level])
            .arg("-i")
            .arg(input)
            .args(["-c", "copy", "-movflags", "faststart", "-f", "mp4"])
            .arg(output);

        debug!(input = %input.display(), output = %output.display(), "remuxing for faststart");
        let result = self.run_with_timeout(command).await.map_err(|e| match e {
            MediaToolError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                MediaToolError::FfmpegNotFound {
                    path: self.config.ffmpeg_path.clone(),
                }
            }
            other => other,
        })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr).into_owned();
            return Err(MediaToolError::transcode_failed(
                format!("ffmpeg exited with status {:?}", result.status.code()),
                if stderr.is_empty() { None } else { Some(stderr) },
            ));
        }

        Ok(())
    }

    async fn validate(&self) -> Result<(), MediaToolError> {
        let ffmpeg_result = Command::new(&self.config.ffmpeg_path)
            .arg("-version")
            .output()
            .await;

        if let Err(e) = ffmpeg_result {
            if e.kind() == std::io::ErrorKind::NotFound {
                return Err(MediaToolError::FfmpegNotFound {
                    path: self.config.ffmpeg_path.clone(),
                });
            }
            return Err(MediaToolError::Io(e));
        }

        let ffprobe_result = Command::new(&self.config.ffprobe_path)
            .arg("-version")
            .output()
            .await;

        if let Err(e) = ffprobe_result {
            if e.kind() == std::io::ErrorKind::NotFound {
                return Err(MediaToolError::FfprobeNotFound {
                    path: self.config.ffprobe_path.clone(),
                });
            }
            return Err(MediaToolError::Io(e));
        }

        Ok(())
    }
}
