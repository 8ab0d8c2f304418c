use web_sys::{Element, HtmlImageElement};
use yew::prelude::*;

use crate::config;

pub fn report_broken(kind: &str, path: &str) {
    if config::diagnostics_enabled() {
        gloo_console::error!(format!("{} failed to load: {}", kind, path));
    }
}

/// `onerror` for decorative images: report and leave the element alone.
pub fn log_on_error(kind: &'static str, path: &'static str) -> Callback<Event> {
    Callback::from(move |_: Event| report_broken(kind, path))
}

/// `onerror` for grid tiles: report and hide the broken element.
pub fn hide_on_error(kind: &'static str, path: &'static str) -> Callback<Event> {
    Callback::from(move |e: Event| {
        report_broken(kind, path);
        if let Some(img) = e.target_dyn_into::<Element>() {
            let _ = img.set_attribute("style", "display: none;");
        }
    })
}

/// Current `src` of the image an error event fired on.
pub fn failed_src(e: &Event) -> Option<(HtmlImageElement, String)> {
    let img = e.target_dyn_into::<HtmlImageElement>()?;
    let src = img.src();
    Some((img, src))
}
