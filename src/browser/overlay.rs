//! Loading Overlay
//!
//! The overlay belongs to the hosting page; it is only toggled here.

use wasm_bindgen::JsCast;

use super::document;

pub const OVERLAY_ID: &str = "loading-overlay";

fn set_overlay_display(display: &str) {
    let overlay = document()
        .ok()
        .and_then(|d| d.get_element_by_id(OVERLAY_ID))
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(overlay) = overlay {
        // must win over the injected `display: none !important`
        let _ = overlay.style().set_property_with_priority("display", display, "important");
    }
}

pub fn show_overlay() {
    set_overlay_display("flex");
}

pub fn hide_overlay() {
    set_overlay_display("none");
}
