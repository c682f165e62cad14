// Generate interactor - clip generation use case

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::errors::DomainError;
use crate::domain::model::{GenerateRequest, Segment, ShortClip};
use crate::ports::BackendPort;

/// Interactor for the clip generation use case
pub struct GenerateInteractor {
    backend: Arc<dyn BackendPort>,
}

impl GenerateInteractor {
    /// Create new generate interactor with an injected backend port
    pub fn new(backend: Arc<dyn BackendPort>) -> Self {
        Self { backend }
    }

    /// Request clip generation for a backend-side source path.
    ///
    /// Clips come back in server order and are kept as-is; a clip whose
    /// declared duration disagrees with its boundaries is logged, not
    /// repaired.
    pub async fn generate(
        &self,
        video_path: &str,
        max_duration: u32,
        segments: Vec<Segment>,
    ) -> Result<Vec<ShortClip>, DomainError> {
        let request = GenerateRequest::with_segments(video_path.to_string(), max_duration, segments)?;

        info!(
            "Requesting shorts for {} (max {}s, {} explicit segments)",
            request.video_path,
            request.max_duration,
            request.segments.len()
        );

        let shorts = self.backend.generate_shorts(&request).await?;

        for clip in &shorts {
            if !clip.is_consistent() {
                warn!(
                    "Clip {} reports duration {}s for range {}",
                    clip.id,
                    clip.duration,
                    clip.time_range()
                );
            }
        }

        info!("Backend produced {} shorts", shorts.len());
        Ok(shorts)
    }
}
