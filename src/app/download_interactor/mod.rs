// Download interactor - source download and local clip saving use cases

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::domain::errors::DomainError;
use crate::domain::model::DownloadedVideo;
use crate::domain::rules::validate_url;
use crate::output::ClipWriter;
use crate::ports::BackendPort;

/// Interactor for moving media: asking the backend to fetch a source
/// video into its own storage, and saving a rendered short locally
pub struct DownloadInteractor {
    backend: Arc<dyn BackendPort>,
    writer: ClipWriter,
}

impl DownloadInteractor {
    /// Create new download interactor with an injected backend port
    pub fn new(backend: Arc<dyn BackendPort>) -> Self {
        Self {
            backend,
            writer: ClipWriter::new(),
        }
    }

    /// Ask the backend to download the source video.
    ///
    /// The returned path lives on the backend host and is only useful as
    /// input to a later generate call.
    pub async fn fetch_source(
        &self,
        url: &str,
        format_id: &str,
    ) -> Result<DownloadedVideo, DomainError> {
        validate_url(url)?;

        let downloaded = self.backend.download_video(url, format_id).await?;
        info!("Backend stored source at {}", downloaded.file_path);

        Ok(downloaded)
    }

    /// Download a rendered short and save it to `dest`.
    ///
    /// Returns the number of bytes written.
    pub async fn save_short(&self, short_id: &str, dest: &Path) -> Result<u64, DomainError> {
        if short_id.is_empty() {
            return Err(DomainError::BadArgs("clip id cannot be empty".to_string()));
        }

        let bytes = self.backend.download_short(short_id).await?;
        self.writer.save(dest, &bytes)
    }
}
