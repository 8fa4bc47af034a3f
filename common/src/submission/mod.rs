pub mod collaborators;
pub mod error;
mod pipeline;

pub use collaborators::{AssetStore, FormLifecycle, NotificationSink, RecordStore};
pub use error::{CollaboratorError, SubmissionError};
pub use pipeline::SubmissionPipeline;
