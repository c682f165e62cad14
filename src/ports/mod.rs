// Ports - interface contracts between use cases and the outside world

use async_trait::async_trait;

use crate::domain::errors::DomainError;
use crate::domain::model::{DownloadedVideo, GenerateRequest, ShortClip, VideoInfo};

/// Port for the shorts backend service.
///
/// All network side effects go through this seam so that use cases can be
/// exercised against a scripted implementation without real I/O.
#[async_trait]
pub trait BackendPort: Send + Sync {
    /// Look up metadata for a video URL
    async fn video_info(&self, url: &str) -> Result<VideoInfo, DomainError>;

    /// Ask the backend to cut short clips out of a source video.
    ///
    /// Returns the clips in the order the server produced them.
    async fn generate_shorts(
        &self,
        request: &GenerateRequest,
    ) -> Result<Vec<ShortClip>, DomainError>;

    /// Ask the backend to download the source video to its own storage
    async fn download_video(
        &self,
        url: &str,
        format_id: &str,
    ) -> Result<DownloadedVideo, DomainError>;

    /// Fetch the rendered bytes of a generated short
    async fn download_short(&self, short_id: &str) -> Result<Vec<u8>, DomainError>;
}
