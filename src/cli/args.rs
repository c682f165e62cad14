//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

use crate::domain::model::{Segment, DEFAULT_VIDEO_PATH};

/// Clip length bounds accepted for --max-duration, in seconds
fn max_duration_in_range(s: &str) -> Result<u32, String> {
    clap_num::number_range(s, 10, 180)
}

/// Parse "START-END" (whole seconds) into a segment
fn parse_segment(s: &str) -> Result<Segment, String> {
    let (start, end) = s
        .split_once('-')
        .ok_or_else(|| format!("expected START-END, got '{}'", s))?;

    let start: u64 = start
        .trim()
        .parse()
        .map_err(|_| format!("invalid segment start '{}'", start))?;
    let end: u64 = end
        .trim()
        .parse()
        .map_err(|_| format!("invalid segment end '{}'", end))?;

    Segment::new(start, end).map_err(|e| e.to_string())
}

/// Arguments for the info command
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// YouTube video URL
    #[arg(short, long)]
    pub url: String,
}

/// Arguments for the download command
#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// YouTube video URL
    #[arg(short, long)]
    pub url: String,

    /// Format selector forwarded to the backend extractor
    #[arg(long, default_value = "best")]
    pub format_id: String,
}

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Backend-side path of the source video (from a prior download)
    #[arg(long, default_value = DEFAULT_VIDEO_PATH)]
    pub video_path: String,

    /// Maximum clip length in seconds
    #[arg(long, default_value_t = 60, value_parser = max_duration_in_range)]
    pub max_duration: u32,

    /// Explicit clip boundary as START-END seconds (repeatable);
    /// omitted = backend picks boundaries
    #[arg(long = "segment", value_parser = parse_segment)]
    pub segments: Vec<Segment>,
}

/// Arguments for the save command
#[derive(Args, Debug)]
pub struct SaveArgs {
    /// Id of the generated short (e.g. short_1)
    #[arg(short, long)]
    pub id: String,

    /// Destination file (default: <id>.mp4)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the wizard command
#[derive(Args, Debug)]
pub struct WizardArgs {
    /// Start with this URL instead of prompting for one
    #[arg(short, long)]
    pub url: Option<String>,
}
