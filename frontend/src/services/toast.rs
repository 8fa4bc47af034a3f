//! Notification sink rendering transient toasts at the bottom of the page.
//!
//! Each toast is a `div` injected into `<body>` and removed after the
//! configured duration. Text is set through `text_content`, never as HTML.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use common::model::notification::{Notification, NotificationStatus};
use common::submission::NotificationSink;

pub struct ToastSink {
    duration_ms: u32,
}

impl ToastSink {
    pub fn new(duration_ms: u32) -> Self {
        Self { duration_ms }
    }
}

impl NotificationSink for ToastSink {
    fn notify(&self, notification: Notification) {
        show_toast(&notification, self.duration_ms);
    }
}

pub fn show_toast(notification: &Notification, duration_ms: u32) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Ok(title), Ok(description), Some(body)) = (
        document.create_element("div"),
        document.create_element("strong"),
        document.create_element("div"),
        document.body(),
    ) else {
        return;
    };

    title.set_text_content(Some(&notification.title));
    description.set_text_content(Some(&notification.description));
    toast.append_child(&title).ok();
    toast.append_child(&description).ok();
    toast.set_attribute("role", "status").ok();

    let background = match notification.status {
        NotificationStatus::Success => "#2e7d32",
        NotificationStatus::Error => "#c62828",
    };

    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", background).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();
    style.set_property("font-family", "Arial, sans-serif").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(duration_ms).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}
