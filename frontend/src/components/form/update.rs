//! Update function for the add-image form.
//!
//! Elm-style: receives the current `FormAddImage` state, the `Context` and a
//! `Msg`, mutates the state and returns whether the view should re-render.
//!
//! Key behaviors
//! - File selection: validate the first file, then start the asset upload
//!   and the local thumbnail read, both tagged with the same upload ticket.
//! - Text fields: store the value; revalidate once a submit was attempted.
//! - Submit: compute inline messages, then run the submission pipeline in the
//!   background. The pipeline answers with `ResetAndClose` (when the attempt
//!   went past validation) followed by `SubmitFinished`.

use common::model::pending_upload::UploadPhase;
use common::submission::{AssetStore, SubmissionError};
use common::validation::Field;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{read_data_url, selected_file, FormHandle};
use super::messages::Msg;
use super::state::FormAddImage;

pub fn update(form: &mut FormAddImage, ctx: &Context<FormAddImage>, msg: Msg) -> bool {
    match msg {
        Msg::FilesSelected(files) => {
            let metadata: Vec<_> = files.iter().map(selected_file).collect();
            let result = form.pipeline.rules().validate_image(&metadata);
            let valid = result.is_ok();
            form.errors.record(Field::Image, result);
            form.local_image_url = None;
            form.preview_ticket = None;

            let first = files.into_iter().next();
            match (valid, first, metadata.into_iter().next()) {
                (true, Some(file), Some(meta)) => {
                    let ticket = form.pending.begin_upload(meta);
                    form.preview_ticket = Some(ticket);

                    let assets = form.assets.clone();
                    let link = ctx.link().clone();
                    let upload_file = file.clone();
                    spawn_local(async move {
                        let result = assets.upload(&upload_file).await;
                        link.send_message(Msg::AssetUploaded { ticket, result });
                    });

                    let link = ctx.link().clone();
                    spawn_local(async move {
                        if let Some(data_url) = read_data_url(file).await {
                            link.send_message(Msg::LocalPreviewReady { ticket, data_url });
                        }
                    });
                }
                (_, _, meta) => form.pending.select_file(meta),
            }
            true
        }
        Msg::AssetUploaded { ticket, result } => form.pending.complete_upload(ticket, result),
        Msg::LocalPreviewReady { ticket, data_url } => {
            if form.preview_ticket != Some(ticket) {
                return false;
            }
            form.local_image_url = Some(data_url);
            true
        }
        Msg::UpdateTitle(title) => {
            form.pending.title = title;
            if form.attempted {
                let result = form.pipeline.rules().validate_title(&form.pending.title);
                form.errors.record(Field::Title, result);
            }
            true
        }
        Msg::UpdateDescription(description) => {
            form.pending.description = description;
            if form.attempted {
                let result = form
                    .pipeline
                    .rules()
                    .validate_description(&form.pending.description);
                form.errors.record(Field::Description, result);
            }
            true
        }
        Msg::Submit => {
            if !form.can_submit() {
                return false;
            }
            form.attempted = true;
            form.errors = form.pipeline.rules().validate_upload(&form.pending);
            form.submitting = true;

            let pipeline = form.pipeline.clone();
            let pending = form.pending.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let handle = FormHandle(link.clone());
                let outcome = pipeline.submit(&pending, &handle).await;
                link.send_message(Msg::SubmitFinished(outcome));
            });
            true
        }
        Msg::SubmitFinished(outcome) => {
            form.submitting = false;
            match outcome {
                Ok(Some(id)) => log::debug!("form submitted record {}", id),
                Ok(None) => log::debug!("form submitted a record"),
                Err(SubmissionError::ValidationFailed(errors)) => {
                    for error in errors {
                        form.errors.record(error.field, Err(error));
                    }
                }
                Err(err) => log::debug!("form submission ended: {}", err),
            }
            true
        }
        Msg::ResetAndClose => {
            form.reset();
            ctx.props().close_modal.emit(());
            true
        }
    }
}

/// Short status line for the image field.
pub fn upload_status(phase: &UploadPhase) -> Option<&'static str> {
    match phase {
        UploadPhase::Uploading(_) => Some("Uploading image..."),
        UploadPhase::Ready { .. } => Some("Image uploaded"),
        UploadPhase::Idle => None,
    }
}
