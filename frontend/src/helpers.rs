//! Browser utilities shared by the portal views.
//!
//! - **User Feedback**: [`show_toast`] injects a short-lived notification so
//!   failures and confirmations never block the page.
//! - **Time Zone**: [`browser_normalizer`] builds a `FeedbackNormalizer` that
//!   renders timestamps in the visitor's local zone.
//! - **Confirmation**: [`confirm`] wraps `window.confirm` for destructive actions.

use chrono::{DateTime, FixedOffset, Utc};
use common::error::NetworkError;
use common::normalize::FeedbackNormalizer;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

/// Displays a temporary notification at the bottom of the screen that removes
/// itself after three seconds.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
        toast.set_text_content(Some(message));
        let html_toast: HtmlElement = toast.unchecked_into();
        let style = html_toast.style();
        style.set_property("position", "fixed").ok();
        style.set_property("bottom", "20px").ok();
        style.set_property("left", "50%").ok();
        style.set_property("transform", "translateX(-50%)").ok();
        style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
        style.set_property("color", "#fff").ok();
        style.set_property("padding", "10px 20px").ok();
        style.set_property("border-radius", "4px").ok();
        style.set_property("z-index", "10000").ok();

        if body.append_child(&html_toast).is_ok() {
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(3000).await;
                if let Some(parent) = html_toast.parent_node() {
                    parent.remove_child(&html_toast).ok();
                }
            });
        }
    }
}

/// Logs a failed request and tells the user, unless the request was aborted
/// because its view went away.
pub fn report_network_error(context: &str, err: &NetworkError) {
    if matches!(err, NetworkError::Aborted) {
        return;
    }
    gloo_console::error!(format!("{}: {}", context, err));
    show_toast(context);
}

/// Normalizer rendering `createdAt` in the browser's local zone, using the
/// offset in effect at each record's own instant.
pub fn browser_normalizer() -> FeedbackNormalizer {
    FeedbackNormalizer::with_zone(browser_offset_at)
}

fn browser_offset_at(at: DateTime<Utc>) -> Option<FixedOffset> {
    let date = js_sys::Date::new(&JsValue::from_f64(at.timestamp_millis() as f64));
    // Minutes *behind* UTC, e.g. 300 for UTC-5.
    let minutes = date.get_timezone_offset();
    if minutes.is_finite() {
        FixedOffset::west_opt((minutes * 60.0) as i32)
    } else {
        None
    }
}

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
