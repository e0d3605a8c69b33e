//! General Information Section
//!
//! Date, client, equipment, mileage and hours.

use leptos::prelude::*;

use form_model::GeneralField;

use crate::store::{store_is_flagged, store_set_field, use_form_store, FormStateStoreFields};

/// One labelled header input
#[component]
fn GeneralInput(field: GeneralField) -> impl IntoView {
    let store = use_form_store();
    let required = field.required();

    view! {
        <div class="form-group">
            <label for=field.name()>
                {field.label()}
                {required.then(|| view! { <span class="required">" *"</span> })}
            </label>
            <input
                type=field.input_type()
                id=field.name()
                name=field.name()
                required=required
                class:error=move || store_is_flagged(&store, field)
                prop:value=move || store.draft().read().general.get(field).to_string()
                on:input=move |ev| store_set_field(&store, field, event_target_value(&ev))
            />
        </div>
    }
}

/// "1. Datos generales"
#[component]
pub fn GeneralInfoSection() -> impl IntoView {
    view! {
        <section class="card general-info">
            <h2>"1. Datos generales"</h2>
            {GeneralField::ALL.into_iter().map(|field| view! { <GeneralInput field=field /> }).collect_view()}
        </section>
    }
}
