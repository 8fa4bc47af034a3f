//! Loads the gallery configuration embedded in the host page.
//!
//! The page may carry `<script id="gallery-config" type="application/json">`
//! with any subset of `GalleryConfig` fields. A missing element yields the
//! defaults; an invalid one is reported on the console and also falls back.

use common::config::GalleryConfig;

const CONFIG_ELEMENT_ID: &str = "gallery-config";

pub fn load() -> GalleryConfig {
    let Some(json) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|e| e.text_content())
    else {
        return GalleryConfig::default();
    };

    match GalleryConfig::from_json(&json) {
        Ok(config) => config,
        Err(err) => {
            // The logger is not installed yet at this point.
            gloo_console::warn!(format!("{}; using defaults", err));
            GalleryConfig::default()
        }
    }
}
