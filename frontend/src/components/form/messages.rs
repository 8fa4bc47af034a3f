use common::model::image_record::RecordId;
use common::model::pending_upload::UploadTicket;
use common::submission::{CollaboratorError, SubmissionError};

pub enum Msg {
    /// Files picked in the file input; only the first one is used.
    FilesSelected(Vec<web_sys::File>),
    AssetUploaded {
        ticket: UploadTicket,
        result: Result<String, CollaboratorError>,
    },
    LocalPreviewReady {
        ticket: UploadTicket,
        data_url: String,
    },
    UpdateTitle(String),
    UpdateDescription(String),
    Submit,
    SubmitFinished(Result<Option<RecordId>, SubmissionError>),
    /// Raised by the pipeline once a submission went past validation.
    ResetAndClose,
}
