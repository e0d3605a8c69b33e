//! Browser Bindings
//!
//! Thin wrappers over the DOM calls the form needs, organized by concern.

mod dialog;
mod files;
mod overlay;
mod page;
mod styles;
mod textarea;

use wasm_bindgen::prelude::*;

/// Stringify a thrown JS value
fn js_err(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn document() -> Result<web_sys::Document, String> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_string())
}

// Re-export all public items
pub use dialog::*;
pub use files::*;
pub use overlay::*;
pub use page::*;
pub use styles::*;
pub use textarea::*;
