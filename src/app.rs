//! Report Form App
//!
//! Root component: provides state and wires the page-level behaviours.

use leptos::prelude::*;
use reactive_stores::Store;

use form_model::viewport::is_mobile;
use form_model::FormConfig;

use crate::browser;
use crate::components::{ConditionList, CorrectionList, GeneralInfoSection, SubmitButton};
use crate::context::FormContext;
use crate::responsive::setup_responsive;
use crate::store::{FormState, FormStateStoreFields};
use crate::submission::{handle_submit, install_page_guards};

pub const FORM_ID: &str = "mantenimiento-form";

#[component]
pub fn App(config: FormConfig) -> impl IntoView {
    let viewport = leptos_viewport::create_viewport_signals();
    let mobile = is_mobile(&config, leptos_viewport::inner_width(), &leptos_viewport::user_agent());
    let action = config.action.clone();

    // Provide context to all children
    let ctx = FormContext::new(config, viewport, mobile);
    provide_context(ctx);
    let store = Store::new(FormState::new(&browser::today_iso()));
    provide_context(store);

    tracing::info!(mobile, "form initialized");

    setup_responsive(ctx);
    install_page_guards(store);

    let busy = move || store.lifecycle().read().phase().is_busy();

    view! {
        <form
            id=FORM_ID
            method="post"
            enctype="multipart/form-data"
            action=action
            novalidate=true
            class="report-form"
            class:loading=busy
            on:submit=move |ev| handle_submit(ev, store, ctx)
        >
            <GeneralInfoSection />
            <ConditionList />
            <CorrectionList />
            <div class="form-actions">
                <SubmitButton />
            </div>
        </form>
    }
}
