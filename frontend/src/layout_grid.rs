use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct LayoutGridProps {
    pub columns: usize,
    #[prop_or(24)]
    pub gap_px: u32,
    pub children: Children,
}

/// Fixed-column CSS grid; children keep the order they are given in.
pub struct LayoutGrid;

impl Component for LayoutGrid {
    type Message = ();
    type Properties = LayoutGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        LayoutGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat({}, minmax(0, 1fr));
             gap: {}px;
             width: 100%;",
            props.columns.max(1),
            props.gap_px
        );

        html! {
            <div class="layout-grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
