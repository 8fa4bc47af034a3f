use super::PreviewState;

/// What the modal viewer renders for a visible preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    pub image_url: String,
    pub image_alt: &'static str,
    /// Link to the original asset, opened outside the gallery.
    pub original_href: String,
    pub original_label: &'static str,
}

/// Nothing while hidden; the image plus a link to the original otherwise.
pub fn modal_content(state: &PreviewState) -> Option<ModalContent> {
    match state {
        PreviewState::Hidden => None,
        PreviewState::Visible { image_url } => Some(ModalContent {
            image_url: image_url.clone(),
            image_alt: "Image view",
            original_href: image_url.clone(),
            original_label: "Open original",
        }),
    }
}
