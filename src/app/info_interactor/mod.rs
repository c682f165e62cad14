// Info interactor - metadata lookup use case

use std::sync::Arc;

use tracing::info;

use crate::domain::errors::DomainError;
use crate::domain::model::VideoInfo;
use crate::domain::rules::validate_url;
use crate::ports::BackendPort;

/// Interactor for the metadata lookup use case
pub struct InfoInteractor {
    backend: Arc<dyn BackendPort>,
}

impl InfoInteractor {
    /// Create new info interactor with an injected backend port
    pub fn new(backend: Arc<dyn BackendPort>) -> Self {
        Self { backend }
    }

    /// Fetch metadata for a video URL.
    ///
    /// The only local validation is the non-empty check; everything else
    /// is the backend's call.
    pub async fn fetch(&self, url: &str) -> Result<VideoInfo, DomainError> {
        validate_url(url)?;

        let video = self.backend.video_info(url).await?;
        info!(
            "Fetched metadata: '{}' by {} ({})",
            video.title,
            video.uploader,
            video.duration_label()
        );

        Ok(video)
    }
}
