use thiserror::Error;

use crate::validation::FieldError;

/// Failure reported by an external collaborator (asset or record store).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected status {code}: {body}")]
    Status { code: u16, body: String },
    #[error("invalid response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// Shown inline next to each field; the form stays open.
    #[error("validation failed for {}", field_names(.0))]
    ValidationFailed(Vec<FieldError>),
    #[error("image is required")]
    MissingAsset,
    #[error("persisting the image failed: {0}")]
    PersistenceFailed(#[source] CollaboratorError),
    #[error("a submission is already in progress")]
    InFlight,
}

fn field_names(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.field.name())
        .collect::<Vec<_>>()
        .join(", ")
}
