//! Types for the media tool module.

use serde::{Deserialize, Serialize};

use super::error::MediaToolError;

/// Tolerance band around the canonical 16:9 / 9:16 ratios.
const RATIO_TOLERANCE: f64 = 0.05;

/// Coarse classification of a video's frame aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Landscape,
    Portrait,
    Other,
}

impl Orientation {
    /// Classifies non-zero dimensions into an orientation category.
    ///
    /// Landscape is checked before portrait; ratios outside both tolerance
    /// bands fall through to `Other`.
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        let ratio = width as f64 / height as f64;
        if (ratio - 16.0 / 9.0).abs() < RATIO_TOLERANCE {
            Orientation::Landscape
        } else if (ratio - 9.0 / 16.0).abs() < RATIO_TOLERANCE {
            Orientation::Portrait
        } else {
            Orientation::Other
        }
    }

    /// Storage key prefix for this orientation.
    pub fn prefix(&self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
            Orientation::Other => "other",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A single stream descriptor from a probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamInfo {
    /// Stream kind as reported by the probe tool ("video", "audio", ...).
    pub kind: String,
    /// Frame width in pixels, present for video streams.
    pub width: Option<u32>,
    /// Frame height in pixels, present for video streams.
    pub height: Option<u32>,
    /// Codec name, when reported.
    pub codec: Option<String>,
}

/// Parsed probe output: the file's stream layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeResult {
    pub streams: Vec<StreamInfo>,
}

impl ProbeResult {
    /// Derives the orientation category from the first video stream.
    ///
    /// Fails with `NoVideoStream` when no stream has kind "video", and with
    /// `InvalidDimensions` when the video stream reports a missing or zero
    /// width/height.
    pub fn orientation(&self) -> Result<Orientation, MediaToolError> {
        let stream = self
            .streams
            .iter()
            .find(|s| s.kind == "video")
            .ok_or(MediaToolError::NoVideoStream)?;

        let width = stream.width.unwrap_or(0);
        let height = stream.height.unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(MediaToolError::InvalidDimensions { width, height });
        }

        Ok(Orientation::from_dimensions(width, height))
    }
}
