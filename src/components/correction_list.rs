//! Correction List
//!
//! Repair rows: title, photo and description, posted as multipart fields.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use form_model::correction::{description_id, file_input_id, title_input_id, DESC_FIELD, IMAGE_FIELD, TITLE_FIELD};
use form_model::RowKey;

use crate::browser;
use crate::components::{ImagePreview, RemoveRowButton};
use crate::context::use_form_context;
use crate::store::{
    store_add_correction, store_clear_image, store_complete_preview, store_remove_correction, store_select_image,
    store_set_correction_description, store_set_correction_title, use_form_store, FormStateStoreFields,
};

/// One correction row
#[component]
fn CorrectionItem(row: RowKey) -> impl IntoView {
    let store = use_form_store();
    let ctx = use_form_context();
    let label = ctx.with_config(|c| c.labels.correction_placeholder.clone());

    let placeholder = move || store.draft().read().correction_placeholder(row, &label).unwrap_or_default();
    let title = move || store.draft().read().corrections.get(row).map(|r| r.title.clone()).unwrap_or_default();
    let description =
        move || store.draft().read().corrections.get(row).map(|r| r.description.clone()).unwrap_or_default();

    let on_file_change = move |ev: web_sys::Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
            return;
        };
        let Some((file, meta)) = browser::selected_file(&input) else {
            store_clear_image(&store, row);
            return;
        };

        let config = ctx.config();
        match store_select_image(&store, row, meta, leptos_viewport::inner_width(), &config) {
            Err(rejection) => {
                browser::alert(config.labels.rejection(&rejection));
                input.set_value("");
            }
            Ok(Some(ticket)) => spawn_local(async move {
                match browser::read_as_data_url(&file).await {
                    Ok(data_url) => {
                        if !store_complete_preview(&store, row, ticket, data_url) {
                            tracing::debug!(row = %row, "stale preview discarded");
                        }
                    }
                    Err(e) => tracing::warn!(row = %row, error = %e, "could not read image for preview"),
                }
            }),
            Ok(None) => {}
        }
    };

    view! {
        <div class="item-row correction-row">
            <div class="correction-header">
                <input
                    type="text"
                    name=TITLE_FIELD
                    id=title_input_id(row)
                    placeholder=placeholder
                    prop:value=title
                    on:input=move |ev| store_set_correction_title(&store, row, event_target_value(&ev))
                />
                <RemoveRowButton on_remove=Callback::new(move |_: ()| store_remove_correction(&store, row)) />
            </div>
            <div class="correction-image">
                <input
                    type="file"
                    name=IMAGE_FIELD
                    id=file_input_id(row)
                    accept="image/*"
                    on:change=on_file_change
                />
                <ImagePreview row=row />
            </div>
            <textarea
                name=DESC_FIELD
                id=description_id(row)
                placeholder="Describe la corrección realizada"
                prop:value=description
                on:input=move |ev| {
                    if let Some(textarea) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok()) {
                        browser::auto_resize(&textarea);
                    }
                    store_set_correction_description(&store, row, event_target_value(&ev));
                }
            ></textarea>
        </div>
    }
}

/// "3. Correcciones"
#[component]
pub fn CorrectionList() -> impl IntoView {
    let store = use_form_store();
    let ctx = use_form_context();
    let add_label = ctx.with_config(|c| c.labels.add_correction.clone());

    let add = move |_| {
        store_add_correction(&store);
    };

    view! {
        <section class="card corrections">
            <h2>"3. Correcciones"</h2>
            <div id="corrections-list">
                <For
                    each=move || store.draft().read().corrections.keys()
                    key=|row| *row
                    children=move |row| view! { <CorrectionItem row=row /> }
                />
            </div>
            <button type="button" class="add-row-btn" on:click=add>{add_label}</button>
        </section>
    }
}
