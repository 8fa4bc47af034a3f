//! Add-image form: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering and helpers.
//!
//! Responsibilities
//! - Re-export `Msg`, `FormAddImageProps` and `FormAddImage`.
//! - Provide the `Component` implementation delegating to `update::update` and `view::view`.
//! - Build the per-instance submission pipeline on mount, so at most one
//!   submission is in flight per mounted form.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::FormAddImageProps;
pub use state::FormAddImage;

impl Component for FormAddImage {
    type Message = Msg;
    type Properties = FormAddImageProps;

    fn create(ctx: &Context<Self>) -> Self {
        FormAddImage::new(&ctx.props().services)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
