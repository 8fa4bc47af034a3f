//! Utility functions for the add-image form.
//!
//! - Converting browser `File` handles into the `SelectedFile` metadata the
//!   validation rule set works on.
//! - Reading a file into a `data:` URL for the local thumbnail.
//! - `FormHandle`, the form-lifecycle handle given to the submission pipeline.

use base64::{engine::general_purpose, Engine as _};
use gloo_file::{futures::read_as_bytes, Blob};
use yew::html::Scope;

use common::model::pending_upload::SelectedFile;
use common::submission::FormLifecycle;

use super::messages::Msg;
use super::state::FormAddImage;

pub fn selected_file(file: &web_sys::File) -> SelectedFile {
    SelectedFile {
        name: file.name(),
        mime_type: file.type_(),
        size: file.size() as u64,
    }
}

/// Collects the files of a `FileList`, in order.
pub fn files_of(list: Option<web_sys::FileList>) -> Vec<web_sys::File> {
    list.map(|list| (0..list.length()).filter_map(|i| list.item(i)).collect())
        .unwrap_or_default()
}

/// Reads `file` into a base64 `data:` URL. `None` if the browser fails to read it.
pub async fn read_data_url(file: web_sys::File) -> Option<String> {
    let mime = file.type_();
    let blob = Blob::from(file);
    match read_as_bytes(&blob).await {
        Ok(bytes) => Some(format!(
            "data:{};base64,{}",
            mime,
            general_purpose::STANDARD.encode(&bytes)
        )),
        Err(err) => {
            log::warn!("could not read selected file for preview: {}", err);
            None
        }
    }
}

/// Routes the pipeline's reset-and-close signal back into the component.
pub struct FormHandle(pub Scope<FormAddImage>);

impl FormLifecycle for FormHandle {
    fn reset_and_close(&self) {
        self.0.send_message(Msg::ResetAndClose);
    }
}
