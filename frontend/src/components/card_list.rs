//! Card grid plus its modal viewer, wired through a `PreviewCoordinator`.
//!
//! Cards only request `show(url)`; the viewer only renders the coordinator's
//! state and requests `hide()`. The component mirrors the coordinator state
//! through a subscription so every transition is exactly one re-render.

use std::rc::Rc;

use common::grid::cards;
use common::model::image_record::ImageRecord;
use common::preview::{PreviewCoordinator, PreviewState, SubscriptionId};
use yew::{html, Component, Context, Html, Properties};

use crate::components::card::CardComponent;
use crate::components::modal::view_image::ModalViewImage;
use crate::layout_grid::LayoutGrid;

#[derive(Properties, PartialEq)]
pub struct CardListProps {
    pub records: Rc<Vec<ImageRecord>>,
    pub columns: usize,
}

pub enum Msg {
    View(String),
    Close,
    PreviewChanged(PreviewState),
}

pub struct CardList {
    coordinator: Rc<PreviewCoordinator>,
    subscription: SubscriptionId,
    preview: PreviewState,
}

impl Component for CardList {
    type Message = Msg;
    type Properties = CardListProps;

    fn create(ctx: &Context<Self>) -> Self {
        let coordinator = Rc::new(PreviewCoordinator::new());
        let on_change = ctx.link().callback(Msg::PreviewChanged);
        let subscription = coordinator.subscribe(move |state| on_change.emit(state.clone()));

        Self {
            preview: coordinator.current(),
            coordinator,
            subscription,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::View(url) => {
                self.coordinator.show(url);
                false
            }
            Msg::Close => {
                self.coordinator.hide();
                false
            }
            Msg::PreviewChanged(state) => {
                self.preview = state;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let now_ms = js_sys::Date::now() as i64;
        let on_view = link.callback(Msg::View);

        html! {
            <>
                <LayoutGrid columns={props.columns}>
                    { for cards(&props.records).into_iter().map(|card| html! {
                        <CardComponent key={card.key.clone()} card={card.clone()} on_view={on_view.clone()} now_ms={now_ms} />
                    }) }
                </LayoutGrid>

                <ModalViewImage state={self.preview.clone()} on_close={link.callback(|_| Msg::Close)} />
            </>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.coordinator.unsubscribe(self.subscription);
    }
}
