//! Submit Button

use leptos::prelude::*;

use crate::context::use_form_context;
use crate::store::{use_form_store, FormStateStoreFields};

/// Submit control; disabled and relabeled while a request is in flight
#[component]
pub fn SubmitButton() -> impl IntoView {
    let store = use_form_store();
    let ctx = use_form_context();
    let (idle_label, busy_label) = ctx.with_config(|c| (c.labels.submit.clone(), c.labels.submitting.clone()));

    let busy = move || store.lifecycle().read().phase().is_busy();

    view! {
        <button type="submit" class="submit-btn" disabled=busy>
            {move || if busy() { busy_label.clone() } else { idle_label.clone() }}
        </button>
    }
}
