use common::preview::{modal_content, PreviewState};
use yew::{html, Callback, Component, Context, Html, Properties};

use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

#[derive(Properties, PartialEq)]
pub struct ModalViewImageProps {
    pub state: PreviewState,
    pub on_close: Callback<()>,
}

/// Lightbox for the selected image. Holds no state of its own.
pub struct ModalViewImage;

impl Component for ModalViewImage {
    type Message = ();
    type Properties = ModalViewImageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ModalViewImage
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let Some(content) = modal_content(&props.state) else {
            return html! {};
        };

        html! {
            <YwMaterialTopSheet open={true} on_close={props.on_close.clone()}>
                <div class="view-image-body">
                    <img
                        src={content.image_url}
                        alt={content.image_alt}
                        style="max-width:min(900px, 90vw);max-height:min(600px, 75vh);"
                    />
                </div>
                <div class="view-image-footer">
                    <a href={content.original_href} target="_blank" rel="noopener noreferrer">
                        { content.original_label }
                    </a>
                </div>
            </YwMaterialTopSheet>
        }
    }
}
