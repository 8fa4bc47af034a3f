use common::grid::{relative_time, Card};
use yew::{html, Callback, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub card: Card,
    /// Receives the card URL when the image is activated.
    pub on_view: Callback<String>,
    /// Reference time for the relative age, in epoch milliseconds.
    pub now_ms: i64,
}

pub struct CardComponent;

impl Component for CardComponent {
    type Message = ();
    type Properties = CardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CardComponent
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let card = &props.card;
        let on_click = {
            let on_view = props.on_view.clone();
            let url = card.url.clone();
            Callback::from(move |_| on_view.emit(url.clone()))
        };

        html! {
            <div class="card">
                <img
                    class="card-image"
                    src={card.url.clone()}
                    alt={card.title.clone()}
                    onclick={on_click}
                    style="cursor:pointer;width:100%;height:12rem;object-fit:cover;"
                />
                <div class="card-body">
                    <h3 class="card-title">{ card.title.clone() }</h3>
                    <p class="card-description">{ card.description.clone() }</p>
                    <span class="card-age">{ relative_time(card.created_at, props.now_ms) }</span>
                </div>
            </div>
        }
    }
}
