//! Maintenance Report Form Entry Point

mod app;
mod browser;
mod components;
mod config;
mod context;
mod responsive;
mod store;
mod submission;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

/// Recent log lines, callable from devtools when a user reports a problem
#[wasm_bindgen]
pub fn form_log() -> String {
    rolling_logger::recent_lines().join("\n")
}

fn main() {
    console_error_panic_hook::set_once();
    rolling_logger::init(rolling_logger::DEFAULT_CAPACITY);

    if let Err(e) = browser::inject_styles_once() {
        tracing::warn!(error = %e, "could not inject form styles");
    }

    let config = config::load_config();
    mount_to_body(move || view! { <App config=config /> });
}
