//! Component state for the add-image form.

use std::rc::Rc;

use common::model::pending_upload::{PendingUpload, UploadTicket};
use common::submission::SubmissionPipeline;
use common::validation::ValidationReport;
use yew::NodeRef;

use crate::services::api::{HttpAssetStore, HttpRecordStore};
use crate::services::toast::ToastSink;
use crate::services::Services;

pub type Pipeline = SubmissionPipeline<HttpRecordStore, ToastSink>;

pub struct FormAddImage {
    /// Title, description, selected file metadata and upload phase.
    pub pending: PendingUpload,

    /// `data:` URL of the selected image, shown as a thumbnail.
    pub local_image_url: Option<String>,

    /// Ticket of the upload whose local preview is expected.
    pub preview_ticket: Option<UploadTicket>,

    /// Inline messages per field.
    pub errors: ValidationReport,

    /// Once a submit was attempted, fields are revalidated as they change.
    pub attempted: bool,

    pub submitting: bool,

    pub pipeline: Rc<Pipeline>,
    pub assets: Rc<HttpAssetStore>,

    /// Reference to the file input, cleared on reset.
    pub file_input_ref: NodeRef,
}

impl FormAddImage {
    pub fn new(services: &Services) -> Self {
        let pipeline = SubmissionPipeline::from_config(
            &services.config,
            services.records.clone(),
            ToastSink::new(services.config.toast_duration_ms),
        );

        Self {
            pending: PendingUpload::new(),
            local_image_url: None,
            preview_ticket: None,
            errors: ValidationReport::default(),
            attempted: false,
            submitting: false,
            pipeline: Rc::new(pipeline),
            assets: services.assets.clone(),
            file_input_ref: NodeRef::default(),
        }
    }

    /// Submit stays disabled while a submission runs or the asset is uploading.
    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.pending.is_uploading()
    }

    /// Returns every transient field to its mount-time value.
    pub fn reset(&mut self) {
        self.pending.reset();
        self.local_image_url = None;
        self.preview_ticket = None;
        self.errors.clear();
        self.attempted = false;
        if let Some(input) = self.file_input_ref.cast::<web_sys::HtmlInputElement>() {
            input.set_value("");
        }
    }
}
