//! Submission Controller
//!
//! Drives the lifecycle on submit and restores the interactive view when a
//! request stalls, the page errors, or the result page loads.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use form_model::{GeneralField, SubmitDecision};

use crate::browser;
use crate::context::FormContext;
use crate::store::{FormStateStoreFields, FormStore};

/// Hidden field read by the server
pub const CONDITIONS_FIELD: &str = "conditions_json";

/// `submit` handler of the report form
pub fn handle_submit(ev: web_sys::SubmitEvent, store: FormStore, ctx: FormContext) {
    sync_conditions_field(&store);

    let missing = store.draft().read_untracked().missing_required();
    let decision = store.lifecycle().write().attempt(move || missing);

    match decision {
        SubmitDecision::Ignored => ev.prevent_default(),
        SubmitDecision::Blocked(missing) => {
            ev.prevent_default();
            flag_missing(&store, &ctx, missing);
        }
        SubmitDecision::Proceed(ticket) => {
            store.flagged().write().clear();
            browser::show_overlay();
            let timeout_ms = ctx.with_config(|c| c.submit_timeout_ms);
            leptos_viewport::defer(timeout_ms, move || {
                if store.lifecycle().write().timeout(ticket) {
                    browser::hide_overlay();
                }
            });
        }
    }
}

/// Write the serialized conditions straight into the hidden input so the
/// posted value never lags behind a pending render
fn sync_conditions_field(store: &FormStore) {
    let json = store.draft().read_untracked().conditions_json();
    let input = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONDITIONS_FIELD))
        .and_then(|e| e.dyn_into::<web_sys::HtmlInputElement>().ok());
    match input {
        Some(input) => input.set_value(&json),
        None => tracing::warn!("hidden {} input missing", CONDITIONS_FIELD),
    }
}

fn flag_missing(store: &FormStore, ctx: &FormContext, missing: Vec<GeneralField>) {
    let first = missing.first().copied();
    *store.flagged().write() = missing;

    let message = ctx.with_config(|c| c.labels.required_missing.clone());
    browser::alert(&message);

    if let Some(field) = first {
        if let Err(e) = browser::reveal_field(field.name()) {
            tracing::warn!(error = %e, "could not scroll to flagged field");
        }
    }
}

/// Put the form back into its interactive state
pub fn restore_interactive(store: FormStore, reason: &str) {
    if store.lifecycle().write().reset() {
        tracing::info!(reason, "submission state reset");
    }
    browser::hide_overlay();
}

/// Global safety nets: result-page load, back/forward cache, page errors
pub fn install_page_guards(store: FormStore) {
    let on_loaded = move || {
        if browser::is_result_page() {
            restore_interactive(store, "result page");
        }
    };
    if browser::is_loaded() {
        on_loaded();
    } else {
        leptos_viewport::bind_window_listener("load", move |_| on_loaded());
    }

    leptos_viewport::bind_window_listener("pageshow", move |ev| {
        let persisted = ev
            .dyn_ref::<web_sys::PageTransitionEvent>()
            .map(|e| e.persisted())
            .unwrap_or(false);
        if persisted {
            restore_interactive(store, "restored from cache");
        }
    });

    leptos_viewport::bind_window_listener("error", move |ev| {
        let message = ev
            .dyn_ref::<web_sys::ErrorEvent>()
            .map(|e| e.message())
            .unwrap_or_default();
        tracing::error!(%message, "page error detected");
        restore_interactive(store, "page error");
    });
}
