use std::sync::Arc;
use std::time::Duration;

use crate::adapters::HttpBackendAdapter;
use crate::app::{
    download_interactor::DownloadInteractor, generate_interactor::GenerateInteractor,
    info_interactor::InfoInteractor, wizard_interactor::WizardInteractor,
};
use crate::config::Settings;
use crate::domain::errors::DomainError;
use crate::ports::BackendPort;

/// Wires the HTTP adapter into the use-case interactors
pub struct AppContainer {
    info_interactor: Arc<InfoInteractor>,
    generate_interactor: Arc<GenerateInteractor>,
    download_interactor: Arc<DownloadInteractor>,
    wizard_interactor: Arc<WizardInteractor>,
}

impl AppContainer {
    /// Build the container from settings
    pub fn from_settings(settings: &Settings) -> Result<Self, DomainError> {
        let backend = Arc::new(HttpBackendAdapter::new(
            &settings.api_base_url,
            Duration::from_secs(settings.timeout_secs),
        )?);

        Ok(Self::with_backend(backend))
    }

    /// Build the container around an arbitrary backend implementation
    pub fn with_backend(backend: Arc<dyn BackendPort>) -> Self {
        Self {
            info_interactor: Arc::new(InfoInteractor::new(Arc::clone(&backend))),
            generate_interactor: Arc::new(GenerateInteractor::new(Arc::clone(&backend))),
            download_interactor: Arc::new(DownloadInteractor::new(Arc::clone(&backend))),
            wizard_interactor: Arc::new(WizardInteractor::new(backend)),
        }
    }

    pub fn info_interactor(&self) -> Arc<InfoInteractor> {
        Arc::clone(&self.info_interactor)
    }

    pub fn generate_interactor(&self) -> Arc<GenerateInteractor> {
        Arc::clone(&self.generate_interactor)
    }

    pub fn download_interactor(&self) -> Arc<DownloadInteractor> {
        Arc::clone(&self.download_interactor)
    }

    pub fn wizard_interactor(&self) -> Arc<WizardInteractor> {
        Arc::clone(&self.wizard_interactor)
    }
}
