//! Dialogs and Focus
//!
//! Blocking alerts and moving the user to a field.

use wasm_bindgen::JsCast;

use super::document;

/// Blocking `window.alert`
pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

/// Smooth-scroll an element to the centre of the viewport
pub fn scroll_to_center(element: &web_sys::Element) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Scroll to and focus the element with this id
pub fn reveal_field(id: &str) -> Result<(), String> {
    let element = document()?
        .get_element_by_id(id)
        .ok_or_else(|| format!("no element #{}", id))?;
    scroll_to_center(&element);
    if let Some(html) = element.dyn_ref::<web_sys::HtmlElement>() {
        let _ = html.focus();
    }
    Ok(())
}

/// Focus the element with this id, if it exists
pub fn focus_by_id(id: &str) {
    let element = document().ok().and_then(|d| d.get_element_by_id(id));
    if let Some(html) = element.and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok()) {
        let _ = html.focus();
    }
}
