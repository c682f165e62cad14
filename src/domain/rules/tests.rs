// Unit tests for the wizard transition table

use super::*;
use crate::domain::errors::DomainError;

#[test]
fn test_forward_transitions() {
    let step = WizardStep::Input.on(WizardEvent::MetadataFetched).unwrap();
    assert_eq!(step, WizardStep::Processing);

    let step = step.on(WizardEvent::ClipsGenerated).unwrap();
    assert_eq!(step, WizardStep::Editing);
}

#[test]
fn test_reset_returns_to_input_from_any_step() {
    for step in WizardStep::all_steps() {
        assert_eq!(step.on(WizardEvent::Reset).unwrap(), WizardStep::Input);
    }
}

#[test]
fn test_undeclared_pairs_are_rejected() {
    let invalid = [
        (WizardStep::Input, WizardEvent::ClipsGenerated),
        (WizardStep::Processing, WizardEvent::MetadataFetched),
        (WizardStep::Editing, WizardEvent::MetadataFetched),
        (WizardStep::Editing, WizardEvent::ClipsGenerated),
        (WizardStep::Upload, WizardEvent::MetadataFetched),
        (WizardStep::Upload, WizardEvent::ClipsGenerated),
    ];

    for (step, event) in invalid {
        match step.on(event) {
            Err(DomainError::InvalidTransition { from, event: ev }) => {
                assert_eq!(from, step.to_string());
                assert_eq!(ev, event.to_string());
            }
            other => panic!("expected InvalidTransition for ({step}, {event}), got {other:?}"),
        }
    }
}

#[test]
fn test_nothing_transitions_into_upload() {
    for step in WizardStep::all_steps() {
        for event in [
            WizardEvent::MetadataFetched,
            WizardEvent::ClipsGenerated,
            WizardEvent::Reset,
        ] {
            if let Ok(next) = step.on(event) {
                assert_ne!(next, WizardStep::Upload);
            }
        }
    }
}

#[test]
fn test_step_metadata() {
    assert!(WizardStep::Input.is_initial());
    assert!(!WizardStep::Editing.is_initial());
    assert_eq!(WizardStep::Input.number(), 1);
    assert_eq!(WizardStep::Upload.number(), 4);
    assert_eq!(WizardStep::total_steps(), 4);
    assert_eq!(WizardStep::all_steps().len(), 4);
    assert_eq!(WizardStep::default(), WizardStep::Input);
}

#[test]
fn test_step_display_names() {
    assert_eq!(WizardStep::Input.to_string(), "input");
    assert_eq!(WizardStep::Processing.to_string(), "processing");
    assert_eq!(WizardStep::Editing.to_string(), "editing");
    assert_eq!(WizardStep::Upload.to_string(), "upload");
}

#[test]
fn test_validate_url() {
    assert!(validate_url("https://www.youtube.com/watch?v=abc").is_ok());
    // Only emptiness is checked; syntax is the backend's concern
    assert!(validate_url("not a url").is_ok());
    assert!(matches!(validate_url(""), Err(DomainError::EmptyUrl)));
}
