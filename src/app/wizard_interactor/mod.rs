// Wizard interactor - the input -> processing -> editing flow

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::errors::DomainError;
use crate::domain::model::{
    DownloadedVideo, GenerateRequest, Segment, ShortClip, VideoInfo, DEFAULT_VIDEO_PATH,
};
use crate::domain::rules::{validate_url, WizardEvent, WizardStep};
use crate::ports::BackendPort;

/// State held for one wizard run.
///
/// Fetched metadata and clips are owned here and replaced by successful
/// backend responses. A reset moves the step back to `Input` without
/// touching them; the next successful fetch replaces the video and
/// clears stale clips.
#[derive(Debug, Default)]
pub struct WizardSession {
    step: WizardStep,
    url: String,
    video: Option<VideoInfo>,
    shorts: Vec<ShortClip>,
    source_path: Option<String>,
    busy: bool,
}

impl WizardSession {
    /// Create a fresh session on the initial step
    pub fn new() -> Self {
        Self::default()
    }

    /// Current wizard step
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// URL of the last successfully analyzed video
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Metadata of the current video, once fetched
    pub fn video(&self) -> Option<&VideoInfo> {
        self.video.as_ref()
    }

    /// Generated clips, in server order
    pub fn shorts(&self) -> &[ShortClip] {
        &self.shorts
    }

    /// Backend-side source path, once downloaded
    pub fn source_path(&self) -> Option<&str> {
        self.source_path.as_deref()
    }

    /// Whether a request is currently in flight
    pub fn busy(&self) -> bool {
        self.busy
    }

    /// Return to the initial step.
    ///
    /// Held data is not cleared here; it is replaced on the next
    /// successful fetch.
    pub fn reset(&mut self) {
        self.step = WizardStep::Input;
        self.busy = false;
    }
}

/// Interactor driving a wizard session through the backend.
///
/// Every method leaves the session step unchanged on failure and returns
/// the error for the caller to surface.
pub struct WizardInteractor {
    backend: Arc<dyn BackendPort>,
}

impl WizardInteractor {
    /// Create new wizard interactor with an injected backend port
    pub fn new(backend: Arc<dyn BackendPort>) -> Self {
        Self { backend }
    }

    /// Start a fresh session
    pub fn start_session(&self) -> WizardSession {
        WizardSession::new()
    }

    /// Submit a URL: fetch metadata and advance Input -> Processing.
    ///
    /// An empty URL is rejected before any network call. On success the
    /// new metadata replaces the old and previously held clips are
    /// cleared.
    pub async fn submit_url(
        &self,
        session: &mut WizardSession,
        url: &str,
    ) -> Result<(), DomainError> {
        validate_url(url)?;
        let next = session.step.on(WizardEvent::MetadataFetched)?;
        if session.busy {
            return Err(DomainError::Busy);
        }

        session.busy = true;
        let result = self.backend.video_info(url).await;
        session.busy = false;

        let video = result?;
        info!("Metadata fetched for '{}'", video.title);

        session.url = url.to_string();
        session.video = Some(video);
        session.shorts.clear();
        session.source_path = None;
        session.step = next;
        Ok(())
    }

    /// Ask the backend to download the analyzed video into its storage.
    ///
    /// Only meaningful on the Processing step; the step does not change,
    /// but the returned backend path is threaded into later generation.
    pub async fn fetch_source(
        &self,
        session: &mut WizardSession,
        format_id: &str,
    ) -> Result<DownloadedVideo, DomainError> {
        if session.step != WizardStep::Processing {
            return Err(DomainError::InvalidTransition {
                from: session.step.to_string(),
                event: "download-source".to_string(),
            });
        }
        if session.busy {
            return Err(DomainError::Busy);
        }

        let url = session.url.clone();
        session.busy = true;
        let result = self.backend.download_video(&url, format_id).await;
        session.busy = false;

        let downloaded = result?;
        session.source_path = Some(downloaded.file_path.clone());
        Ok(downloaded)
    }

    /// Generate clips and advance Processing -> Editing.
    ///
    /// Uses the downloaded source path when one exists, otherwise the
    /// backend placeholder path.
    pub async fn generate(
        &self,
        session: &mut WizardSession,
        max_duration: u32,
        segments: Vec<Segment>,
    ) -> Result<(), DomainError> {
        let next = session.step.on(WizardEvent::ClipsGenerated)?;
        if session.busy {
            return Err(DomainError::Busy);
        }

        let video_path = session
            .source_path
            .clone()
            .unwrap_or_else(|| DEFAULT_VIDEO_PATH.to_string());
        let request = GenerateRequest::with_segments(video_path, max_duration, segments)?;
        debug!("Generate request: {:?}", request);

        session.busy = true;
        let result = self.backend.generate_shorts(&request).await;
        session.busy = false;

        let shorts = result?;
        info!("Generated {} shorts", shorts.len());

        session.shorts = shorts;
        session.step = next;
        Ok(())
    }

    /// Reset the session to the initial step
    pub fn reset(&self, session: &mut WizardSession) {
        debug!("Resetting wizard from step '{}'", session.step);
        session.reset();
    }
}
