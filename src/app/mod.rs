// Application layer - use case interactors

pub mod container;
pub mod download_interactor;
pub mod generate_interactor;
pub mod info_interactor;
pub mod wizard_interactor;

// Re-export interactors
pub use container::AppContainer;
pub use download_interactor::DownloadInteractor;
pub use generate_interactor::GenerateInteractor;
pub use info_interactor::InfoInteractor;
pub use wizard_interactor::{WizardInteractor, WizardSession};
