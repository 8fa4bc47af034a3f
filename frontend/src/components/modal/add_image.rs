use yew::{html, Callback, Component, Context, Html, Properties};

use crate::components::form::FormAddImage;
use crate::services::Services;
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

#[derive(Properties, PartialEq)]
pub struct ModalAddImageProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub services: Services,
}

/// Hosts the add-image form. The sheet renders nothing while closed, so the
/// form is unmounted and its pending upload discarded on close.
pub struct ModalAddImage;

impl Component for ModalAddImage {
    type Message = ();
    type Properties = ModalAddImageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ModalAddImage
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <YwMaterialTopSheet
                open={props.open}
                on_close={props.on_close.clone()}
                title={Some("Upload image".to_string())}
            >
                <FormAddImage services={props.services.clone()} close_modal={props.on_close.clone()} />
            </YwMaterialTopSheet>
        }
    }
}
