//! Remove Row Button

use leptos::prelude::*;

/// Small × button that removes the row it sits in
#[component]
pub fn RemoveRowButton(
    #[prop(into)] on_remove: Callback<()>,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="remove-row-btn"
            title=title.unwrap_or_else(|| "Eliminar".to_string())
            on:click=move |ev| {
                ev.stop_propagation();
                on_remove.run(());
            }
        >
            "×"
        </button>
    }
}
