//! Thin wrappers over the browser window. Everything degrades to a neutral
//! value when the DOM is not there, so callers never have to unwrap.

use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config;
use crate::scroll_spy::{Section, SectionBounds};

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn document_height() -> f64 {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0)
}

/// Wall clock in milliseconds, for scroll velocity.
pub fn now_ms() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64
}

fn section_element(section: Section) -> Option<HtmlElement> {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if element.is_none() && config::diagnostics_enabled() {
        log::debug!("section #{} is not in the document", section.id());
    }
    element
}

/// Document-space extents of every section currently rendered, in page order.
pub fn section_bounds() -> Vec<SectionBounds> {
    Section::ALL
        .iter()
        .filter_map(|&section| {
            let el = section_element(section)?;
            Some(SectionBounds {
                section,
                top: el.offset_top() as f64,
                height: el.offset_height() as f64,
            })
        })
        .collect()
}

/// Viewport-relative top edge of a section.
pub fn section_rect_top(section: Section) -> Option<f64> {
    section_element(section).map(|el| el.get_bounding_client_rect().top())
}

/// Smooth-scrolls so `section` sits `offset` px below the top of the viewport.
pub fn scroll_to_section(section: Section, offset: f64) {
    let Some(win) = window() else {
        return;
    };
    let Some(rect_top) = section_rect_top(section) else {
        return;
    };
    let target = crate::scroll_spy::scroll_target(rect_top, scroll_y(), offset);
    let options = ScrollToOptions::new();
    options.set_top(target);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}
