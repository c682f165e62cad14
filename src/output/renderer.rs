//! Terminal rendering of backend data
//!
//! Human-readable views live here; every command also accepts `--json`,
//! which serializes the same data with serde_json instead.

use serde::Serialize;

use crate::domain::errors::DomainError;
use crate::domain::model::{DownloadedVideo, ShortClip, VideoInfo};
use crate::utils::time::{format_count, format_duration};

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<(), DomainError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| DomainError::Decode(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

/// Display video metadata in human-readable format
pub fn print_video_info(video: &VideoInfo) {
    println!("Video Information");
    println!("=================");
    println!("Title:     {}", video.title);
    println!("Uploader:  {}", video.uploader);
    println!("Duration:  {}", video.duration_label());

    match video.view_count {
        Some(count) => println!("Views:     {}", format_count(count)),
        None => println!("Views:     unknown"),
    }

    if let Some(date) = video.upload_date() {
        println!("Uploaded:  {}", date.format("%Y-%m-%d"));
    }

    println!("Thumbnail: {}", video.thumbnail);

    if !video.formats.is_empty() {
        println!();
        println!("Formats ({} available):", video.formats.len());
        for format in video.formats.iter().take(5) {
            let id = format.format_id.as_deref().unwrap_or("?");
            let ext = format.ext.as_deref().unwrap_or("?");
            let resolution = format
                .resolution_label()
                .unwrap_or_else(|| "audio/unknown".to_string());
            println!("  {:>6}  {:<5} {}", id, ext, resolution);
        }
        if video.formats.len() > 5 {
            println!("  ... and {} more", video.formats.len() - 5);
        }
    }
}

/// Display generated clips in server order
pub fn print_shorts(shorts: &[ShortClip]) {
    println!("Generated Shorts ({})", shorts.len());
    println!("====================");

    for (i, clip) in shorts.iter().enumerate() {
        println!(
            "{:>3}. {:<30} {}  ({})  [{}]",
            i + 1,
            clip.title,
            clip.time_range(),
            clip.duration_label(),
            clip.status
        );
    }
}

/// Display the result of a source download
pub fn print_downloaded(downloaded: &DownloadedVideo) {
    println!("Source video downloaded on the backend");
    println!("Path:     {}", downloaded.file_path);
    if let Some(title) = &downloaded.title {
        println!("Title:    {}", title);
    }
    if let Some(duration) = downloaded.duration {
        println!("Duration: {}", format_duration(duration));
    }
}

/// Notice shown for the publish actions, which stay backend-owned
pub fn print_publish_notice(platform: &str) {
    println!(
        "Publishing to {} is handled outside this tool; save the clip and upload it there.",
        platform
    );
}
