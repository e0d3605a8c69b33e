//! Textarea Auto-Resize

use wasm_bindgen::JsCast;

use super::document;

/// Grow a textarea to fit its content
pub fn auto_resize(textarea: &web_sys::HtmlTextAreaElement) {
    let style = textarea.style();
    let _ = style.set_property("height", "auto");
    let _ = style.set_property("height", &format!("{}px", textarea.scroll_height()));
}

/// Re-fit every textarea on the page
pub fn auto_resize_all() {
    let Ok(nodes) = document().and_then(|d| d.query_selector_all("textarea").map_err(super::js_err)) else {
        return;
    };
    for i in 0..nodes.length() {
        if let Some(textarea) = nodes.get(i).and_then(|n| n.dyn_into::<web_sys::HtmlTextAreaElement>().ok()) {
            auto_resize(&textarea);
        }
    }
}
