//! Browser-side collaborators of the gallery core.
//!
//! - `api`: asset and record stores speaking HTTP through `gloo-net`.
//! - `toast`: the notification sink, rendering transient toasts in the DOM.

pub mod api;
pub mod toast;

use std::rc::Rc;

use common::cache::CollectionCache;
use common::config::GalleryConfig;

use api::{HttpAssetStore, HttpRecordStore};

/// Everything the gallery widgets share, handed down through props.
#[derive(Clone)]
pub struct Services {
    pub config: Rc<GalleryConfig>,
    pub cache: Rc<CollectionCache>,
    pub records: HttpRecordStore,
    pub assets: Rc<HttpAssetStore>,
}

impl Services {
    pub fn new(config: GalleryConfig) -> Self {
        let cache = Rc::new(CollectionCache::new());
        let records = HttpRecordStore::new(&config.images_endpoint, cache.clone());
        let assets = Rc::new(HttpAssetStore::new(&config.assets_endpoint));

        Self {
            config: Rc::new(config),
            cache,
            records,
            assets,
        }
    }
}

// Services are built once in `main`; identity is enough for Yew's prop diffing.
impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config) && Rc::ptr_eq(&self.cache, &other.cache)
    }
}
