//! Modal top sheet: a full-screen backdrop with a centred panel.
//!
//! Visibility is driven by the `open` prop. The sheet asks its owner to close
//! through `on_close` on a backdrop click, the close button, or Escape.

use uuid::Uuid;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent};
use yew::{classes, html, Callback, Component, Context, Html, NodeRef, Properties};

pub struct YwMaterialTopSheet {
    pub id: String,
    node_ref: NodeRef,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub title: Option<String>,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
            node_ref: NodeRef::default(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }

        let on_backdrop = {
            let on_close = props.on_close.clone();
            Callback::from(move |e: MouseEvent| {
                // Only clicks on the backdrop itself, not bubbling from the panel.
                if e.target() == e.current_target() {
                    on_close.emit(());
                }
            })
        };
        let on_keydown = {
            let on_close = props.on_close.clone();
            Callback::from(move |e: KeyboardEvent| {
                if e.key() == "Escape" {
                    on_close.emit(());
                }
            })
        };
        let on_close_button = {
            let on_close = props.on_close.clone();
            Callback::from(move |_: MouseEvent| on_close.emit(()))
        };

        html! {
            <div
                class={classes!("top-sheet", "show")}
                id={self.id.clone()}
                ref={self.node_ref.clone()}
                tabindex="-1"
                role="dialog"
                aria-modal="true"
                onclick={on_backdrop}
                onkeydown={on_keydown}
            >
                <div class="top-sheet-panel">
                    <div class="top-sheet-header">
                        {
                            if let Some(title) = &props.title {
                                html! { <h2 class="top-sheet-title">{ title.clone() }</h2> }
                            } else {
                                html! {}
                            }
                        }
                        <button class="top-sheet-close" title="Close" onclick={on_close_button}>
                            { "✕" }
                        </button>
                    </div>
                    { props.children.clone() }
                </div>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        // Focus the sheet so Escape reaches its keydown handler.
        if ctx.props().open {
            if let Some(sheet) = self.node_ref.cast::<HtmlElement>() {
                sheet.focus().ok();
            }
        }
    }
}
