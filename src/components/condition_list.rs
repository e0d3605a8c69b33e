//! Condition List
//!
//! Checklist rows plus the hidden `conditions_json` field they feed.

use leptos::prelude::*;

use form_model::condition::{checkbox_id, text_input_id};
use form_model::RowKey;

use crate::components::RemoveRowButton;
use crate::context::use_form_context;
use crate::store::{
    store_add_condition, store_remove_condition, store_set_condition_checked, store_set_condition_text,
    use_form_store, FormStateStoreFields,
};
use crate::submission::CONDITIONS_FIELD;

/// One checklist row
#[component]
fn ConditionItem(row: RowKey) -> impl IntoView {
    let store = use_form_store();
    let text_id = text_input_id(row);
    let check_id = checkbox_id(row);

    let text = move || {
        store.draft().read().conditions.get(row).map(|r| r.text.clone()).unwrap_or_default()
    };
    let checked = move || store.draft().read().conditions.get(row).map(|r| r.checked).unwrap_or(false);

    view! {
        <div class="item-row condition-row">
            <input
                type="checkbox"
                class="cond-checked"
                id=check_id.clone()
                prop:checked=checked
                on:change=move |ev| store_set_condition_checked(&store, row, event_target_checked(&ev))
            />
            <label class="checkbox" for=check_id></label>
            <input
                type="text"
                class="cond-text"
                id=text_id
                placeholder="Describe la condición"
                prop:value=text
                on:input=move |ev| store_set_condition_text(&store, row, event_target_value(&ev))
            />
            <RemoveRowButton on_remove=Callback::new(move |_: ()| store_remove_condition(&store, row)) />
        </div>
    }
}

/// "2. Condiciones"
#[component]
pub fn ConditionList() -> impl IntoView {
    let store = use_form_store();
    let ctx = use_form_context();
    let add_label = ctx.with_config(|c| c.labels.add_condition.clone());
    let focus_delay = ctx.with_config(|c| c.focus_delay_ms);

    let add = move |_| {
        let key = store_add_condition(&store);
        let id = text_input_id(key);
        leptos_viewport::defer(focus_delay, move || crate::browser::focus_by_id(&id));
    };

    view! {
        <section class="card conditions">
            <h2>"2. Condiciones"</h2>
            <div id="conditions-list">
                <For
                    each=move || store.draft().read().conditions.keys()
                    key=|row| *row
                    children=move |row| view! { <ConditionItem row=row /> }
                />
            </div>
            <button type="button" class="add-row-btn" on:click=add>{add_label}</button>
            <input
                type="hidden"
                id=CONDITIONS_FIELD
                name=CONDITIONS_FIELD
                prop:value=move || store.draft().read().conditions_json()
            />
        </section>
    }
}
