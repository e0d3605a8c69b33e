//! Image Preview
//!
//! Inline thumbnail of a correction's selected image.

use leptos::prelude::*;

use form_model::correction::file_input_id;
use form_model::RowKey;

use crate::browser;
use crate::context::use_form_context;
use crate::store::{store_remove_preview, use_form_store, FormStateStoreFields};

#[component]
pub fn ImagePreview(row: RowKey) -> impl IntoView {
    let store = use_form_store();
    let ctx = use_form_context();
    let max_px = ctx.with_config(|c| c.preview_max_px);
    let remove_label = ctx.with_config(|c| c.labels.remove_preview.clone());

    let data_url = move || {
        store
            .draft()
            .read()
            .corrections
            .get(row)
            .and_then(|r| r.preview.data_url().map(str::to_string))
    };

    let remove = move |_| {
        store_remove_preview(&store, row);
        browser::clear_file_input(&file_input_id(row));
    };

    view! {
        {move || data_url().map(|src| view! {
            <div class="image-preview">
                <img
                    src=src
                    alt="Preview"
                    style=format!("max-width: {0}px; max-height: {0}px; border-radius: 4px; margin-top: 10px;", max_px)
                />
                <button type="button" class="link" style="display: block; margin-top: 5px;" on:click=remove>
                    {remove_label.clone()}
                </button>
            </div>
        })}
    }
}
