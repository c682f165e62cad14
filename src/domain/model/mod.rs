// Domain models - wire types shared with the shorts backend

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::utils::time::format_duration;

/// Maximum clip length sent when the user does not override it
pub const DEFAULT_MAX_DURATION: u32 = 60;

/// Backend-side source path sent when no source video was downloaded
pub const DEFAULT_VIDEO_PATH: &str = "/tmp/video.mp4";

/// Format selector sent to the backend when none was requested
pub const DEFAULT_FORMAT_ID: &str = "best";

/// Metadata for a source video, as returned by the video-info endpoint.
///
/// Received verbatim from the backend and never mutated; a new successful
/// lookup replaces the value wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoInfo {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub uploader: String,
    /// Thumbnail URL
    pub thumbnail: String,
    /// Duration in whole seconds
    pub duration: u64,
    /// Not every video exposes a view count
    #[serde(default)]
    pub view_count: Option<u64>,
    #[serde(default)]
    pub description: Option<String>,
    /// Upload date as reported by the extractor, YYYYMMDD
    #[serde(default)]
    pub upload_date: Option<String>,
    #[serde(default)]
    pub formats: Vec<VideoFormat>,
}

impl VideoInfo {
    /// Upload date parsed into a calendar date, if present and well formed
    pub fn upload_date(&self) -> Option<NaiveDate> {
        self.upload_date
            .as_deref()
            .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y%m%d").ok())
    }

    /// Duration rendered as "M:SS"
    pub fn duration_label(&self) -> String {
        format_duration(self.duration)
    }
}

/// One downloadable format advertised for a source video.
///
/// Every field is optional: the extractor reports null for attributes a
/// format does not carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoFormat {
    #[serde(default)]
    pub format_id: Option<String>,
    #[serde(default)]
    pub ext: Option<String>,
    #[serde(default)]
    pub quality: Option<f64>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub filesize: Option<u64>,
    #[serde(default)]
    pub url: Option<String>,
}

impl VideoFormat {
    /// "1280x720" when both dimensions are known
    pub fn resolution_label(&self) -> Option<String> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some(format!("{}x{}", w, h)),
            _ => None,
        }
    }
}

fn default_clip_status() -> String {
    "ready".to_string()
}

/// One generated short clip, as returned by the generate-shorts endpoint.
///
/// The list order is the server's order; the client never reorders or
/// mutates clips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortClip {
    pub id: String,
    pub title: String,
    /// Offset into the source video, whole seconds
    pub start_time: u64,
    pub end_time: u64,
    pub duration: u64,
    #[serde(default = "default_clip_status")]
    pub status: String,
}

impl ShortClip {
    /// Create a clip with validation
    pub fn new(
        id: String,
        title: String,
        start_time: u64,
        end_time: u64,
    ) -> Result<Self, DomainError> {
        if start_time >= end_time {
            return Err(DomainError::InvalidClip(format!(
                "start ({}) must precede end ({})",
                start_time, end_time
            )));
        }

        Ok(Self {
            id,
            title,
            start_time,
            end_time,
            duration: end_time - start_time,
            status: default_clip_status(),
        })
    }

    /// Whether the declared duration matches the clip boundaries
    pub fn is_consistent(&self) -> bool {
        self.start_time < self.end_time && self.duration == self.end_time - self.start_time
    }

    /// "start - end" label, both sides rendered as "M:SS"
    pub fn time_range(&self) -> String {
        format!(
            "{} - {}",
            format_duration(self.start_time),
            format_duration(self.end_time)
        )
    }

    /// Duration rendered as "M:SS"
    pub fn duration_label(&self) -> String {
        format_duration(self.duration)
    }
}

impl fmt::Display for ShortClip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.time_range())
    }
}

/// An explicit clip boundary forwarded to the backend.
///
/// When no segments are supplied the backend picks boundaries itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub start: u64,
    pub end: u64,
}

impl Segment {
    /// Create a segment with validation
    pub fn new(start: u64, end: u64) -> Result<Self, DomainError> {
        if start >= end {
            return Err(DomainError::BadArgs(format!(
                "segment start ({}) must precede end ({})",
                start, end
            )));
        }
        Ok(Self { start, end })
    }
}

/// Request body for the generate-shorts endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub video_path: String,
    pub max_duration: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<Segment>,
}

impl GenerateRequest {
    /// Create a request with backend-chosen clip boundaries
    pub fn new(video_path: String, max_duration: u32) -> Result<Self, DomainError> {
        Self::with_segments(video_path, max_duration, Vec::new())
    }

    /// Create a request with explicit clip boundaries
    pub fn with_segments(
        video_path: String,
        max_duration: u32,
        segments: Vec<Segment>,
    ) -> Result<Self, DomainError> {
        if video_path.is_empty() {
            return Err(DomainError::BadArgs(
                "video path cannot be empty".to_string(),
            ));
        }
        if max_duration == 0 {
            return Err(DomainError::BadArgs(
                "max duration must be positive".to_string(),
            ));
        }

        Ok(Self {
            video_path,
            max_duration,
            segments,
        })
    }
}

/// Response body of the generate-shorts endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ShortsResponse {
    pub shorts: Vec<ShortClip>,
    #[serde(default)]
    pub total_shorts: Option<usize>,
}

/// Response body of the download-video endpoint.
///
/// `file_path` is a path on the backend host, not on this machine; it is
/// only ever threaded back into a generate request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadedVideo {
    pub file_path: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub duration: Option<u64>,
}

/// Error body the backend attaches to non-2xx responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: String,
}
