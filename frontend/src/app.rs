//! Gallery page: paged listing of image records, the card grid with its
//! viewer, and the add-image modal.
//!
//! The page subscribes to the collection cache. When the submission pipeline
//! invalidates the collection, the listing is refetched from the first page.
//! Replies fetched under an older generation, or superseded by a later
//! fetch, are dropped.

use common::listing::{Listing, PageRequest};
use common::model::image_record::ImagePage;
use common::submission::CollaboratorError;
use yew::platform::spawn_local;
use yew::{html, Component, Context, Html, Properties};

use crate::components::card_list::CardList;
use crate::components::modal::add_image::ModalAddImage;
use crate::services::Services;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub services: Services,
}

pub enum Msg {
    /// Fetch the first page again, replacing what is shown.
    Reload,
    LoadMore,
    Loaded {
        generation: u64,
        request: PageRequest,
        result: Result<ImagePage, CollaboratorError>,
    },
    Invalidated,
    OpenUpload,
    CloseUpload,
}

pub struct App {
    listing: Listing,
    error: Option<String>,
    upload_open: bool,
}

impl App {
    fn fetch(ctx: &Context<Self>, request: PageRequest) {
        let services = &ctx.props().services;
        let generation = services.cache.generation(&services.config.collection_key);
        let records = services.records.clone();
        let link = ctx.link().clone();

        spawn_local(async move {
            let result = records.fetch_page(request.after.as_deref()).await;
            link.send_message(Msg::Loaded {
                generation,
                request,
                result,
            });
        });
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        let services = &ctx.props().services;
        let on_invalidated = ctx.link().callback(|_: u64| Msg::Invalidated);
        services
            .cache
            .subscribe(&services.config.collection_key, move |generation| {
                on_invalidated.emit(generation)
            });
        ctx.link().send_message(Msg::Reload);

        Self {
            listing: Listing::new(),
            error: None,
            upload_open: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Reload | Msg::Invalidated => {
                Self::fetch(ctx, self.listing.reload());
                true
            }
            Msg::LoadMore => match self.listing.load_more() {
                Some(request) => {
                    Self::fetch(ctx, request);
                    true
                }
                None => false,
            },
            Msg::Loaded {
                generation,
                request,
                result,
            } => {
                let services = &ctx.props().services;
                if services
                    .cache
                    .is_stale(&services.config.collection_key, generation)
                {
                    log::debug!("dropping page fetched at stale generation {}", generation);
                    return false;
                }

                match result {
                    Ok(page) => {
                        if !self.listing.accept(&request, page) {
                            return false;
                        }
                        self.error = None;
                    }
                    Err(err) => {
                        if !self.listing.fail(&request) {
                            return false;
                        }
                        log::error!("loading images failed: {}", err);
                        self.error = Some("Could not load the images.".to_string());
                    }
                }
                true
            }
            Msg::OpenUpload => {
                self.upload_open = true;
                true
            }
            Msg::CloseUpload => {
                self.upload_open = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let services = &ctx.props().services;
        let loading = self.listing.is_loading();
        let records = self.listing.records();

        html! {
            <div class="gallery">
                <header class="gallery-header" style="display:flex;justify-content:space-between;align-items:center;padding:1rem 0;">
                    <h1>{ "Gallery" }</h1>
                    <button onclick={link.callback(|_| Msg::OpenUpload)}>{ "Add image" }</button>
                </header>

                {
                    if let Some(error) = &self.error {
                        html! {
                            <div class="gallery-error" role="alert">
                                <span>{ error.clone() }</span>
                                <button disabled={loading} onclick={link.callback(|_| Msg::Reload)}>{ "Try again" }</button>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                <CardList records={records.clone()} columns={services.config.grid_columns} />

                {
                    if self.listing.has_more() {
                        html! {
                            <button
                                class="gallery-load-more"
                                disabled={loading}
                                onclick={link.callback(|_| Msg::LoadMore)}
                                style="margin:2.5rem 0;"
                            >
                                { if loading { "Loading..." } else { "Load more" } }
                            </button>
                        }
                    } else if loading && records.is_empty() {
                        html! { <div class="gallery-loading">{ "Loading..." }</div> }
                    } else {
                        html! {}
                    }
                }

                <ModalAddImage
                    open={self.upload_open}
                    on_close={link.callback(|_| Msg::CloseUpload)}
                    services={services.clone()}
                />
            </div>
        }
    }
}
