use crate::app::{App, AppProps};
use crate::services::Services;

mod app;
mod components;
mod config;
mod layout_grid;
mod logger;
mod services;
mod tops_sheet;

fn main() {
    let config = config::load();
    logger::init(config.log_level_filter());

    yew::Renderer::<App>::with_props(AppProps {
        services: Services::new(config),
    })
    .render();
}
