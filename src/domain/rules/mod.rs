// Domain rules - the wizard state machine and submission guards

use std::fmt;

use crate::domain::errors::DomainError;

/// Wizard step.
///
/// Strictly forward-moving; the only backward move is an explicit reset to
/// `Input`. `Upload` is declared for the publish flow but no transition
/// produces it yet; publishing is still handled outside this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    /// Waiting for a video URL
    Input,

    /// Metadata fetched, ready to generate clips
    Processing,

    /// Clips generated, ready to browse and save
    Editing,

    /// Publish flow placeholder, currently unreachable
    Upload,
}

impl WizardStep {
    /// Get step title
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Input => "Enter a YouTube URL",
            WizardStep::Processing => "Video Details",
            WizardStep::Editing => "Generated Shorts",
            WizardStep::Upload => "Publish",
        }
    }

    /// Get step number (1-indexed)
    pub fn number(&self) -> usize {
        match self {
            WizardStep::Input => 1,
            WizardStep::Processing => 2,
            WizardStep::Editing => 3,
            WizardStep::Upload => 4,
        }
    }

    /// Get total number of steps
    pub fn total_steps() -> usize {
        4
    }

    /// Check if this is the initial step
    pub fn is_initial(&self) -> bool {
        matches!(self, WizardStep::Input)
    }

    /// Get all steps in order
    pub fn all_steps() -> Vec<WizardStep> {
        vec![
            WizardStep::Input,
            WizardStep::Processing,
            WizardStep::Editing,
            WizardStep::Upload,
        ]
    }

    /// Apply an event to this step through the transition table.
    ///
    /// Pairs outside the table are rejected; the caller's state stays
    /// unchanged on error.
    pub fn on(self, event: WizardEvent) -> Result<WizardStep, DomainError> {
        match (self, event) {
            (WizardStep::Input, WizardEvent::MetadataFetched) => Ok(WizardStep::Processing),
            (WizardStep::Processing, WizardEvent::ClipsGenerated) => Ok(WizardStep::Editing),
            (_, WizardEvent::Reset) => Ok(WizardStep::Input),
            (step, event) => Err(DomainError::InvalidTransition {
                from: step.to_string(),
                event: event.to_string(),
            }),
        }
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        WizardStep::Input
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WizardStep::Input => "input",
            WizardStep::Processing => "processing",
            WizardStep::Editing => "editing",
            WizardStep::Upload => "upload",
        };
        write!(f, "{}", name)
    }
}

/// Events accepted by the wizard transition table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEvent {
    /// A video-info call succeeded
    MetadataFetched,

    /// A generate-shorts call succeeded
    ClipsGenerated,

    /// The user asked for a new video
    Reset,
}

impl fmt::Display for WizardEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WizardEvent::MetadataFetched => "metadata-fetched",
            WizardEvent::ClipsGenerated => "clips-generated",
            WizardEvent::Reset => "reset",
        };
        write!(f, "{}", name)
    }
}

/// Submission guard for the metadata fetch.
///
/// The only check is non-emptiness; URL syntax is the backend's concern.
pub fn validate_url(url: &str) -> Result<(), DomainError> {
    if url.is_empty() {
        return Err(DomainError::EmptyUrl);
    }
    Ok(())
}

#[cfg(test)]
mod tests;
