//! Properties of the `FormAddImage` component.

use yew::prelude::*;

use crate::services::Services;

#[derive(Properties, PartialEq, Clone)]
pub struct FormAddImageProps {
    /// Stores, cache and configuration shared by the gallery.
    pub services: Services,

    /// Emitted once the form has been reset after a submission, so the host
    /// modal can close.
    pub close_modal: Callback<()>,
}
