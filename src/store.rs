//! Form State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every change
//! goes through the helpers below; the view only reads.

use leptos::prelude::*;
use reactive_stores::Store;

use form_model::{
    FileRejection, FormConfig, GeneralField, ImageMeta, PreviewTicket, ReportDraft, RowKey, SubmissionLifecycle,
};

/// Whole page state
#[derive(Clone, Debug, Default, Store)]
pub struct FormState {
    /// Field values and rows
    pub draft: ReportDraft,
    /// Submission phase and fallback timer
    pub lifecycle: SubmissionLifecycle,
    /// Required fields flagged by the last failed submit
    pub flagged: Vec<GeneralField>,
}

impl FormState {
    pub fn new(today: &str) -> Self {
        Self {
            draft: ReportDraft::new(today),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type FormStore = Store<FormState>;

/// Get the form store from context
pub fn use_form_store() -> FormStore {
    expect_context::<FormStore>()
}

// ========================
// General fields
// ========================

pub fn store_set_field(store: &FormStore, field: GeneralField, value: String) {
    store.draft().write().general.set(field, value);
}

pub fn store_is_flagged(store: &FormStore, field: GeneralField) -> bool {
    store.flagged().read().contains(&field)
}

// ========================
// Conditions
// ========================

pub fn store_add_condition(store: &FormStore) -> RowKey {
    store.draft().write().add_condition()
}

pub fn store_remove_condition(store: &FormStore, key: RowKey) {
    store.draft().write().remove_condition(key);
}

pub fn store_set_condition_text(store: &FormStore, key: RowKey, text: String) {
    store.draft().write().set_condition_text(key, text);
}

pub fn store_set_condition_checked(store: &FormStore, key: RowKey, checked: bool) {
    store.draft().write().set_condition_checked(key, checked);
}

// ========================
// Corrections
// ========================

pub fn store_add_correction(store: &FormStore) -> RowKey {
    store.draft().write().add_correction()
}

pub fn store_remove_correction(store: &FormStore, key: RowKey) {
    store.draft().write().remove_correction(key);
}

pub fn store_set_correction_title(store: &FormStore, key: RowKey, title: String) {
    store.draft().write().set_correction_title(key, title);
}

pub fn store_set_correction_description(store: &FormStore, key: RowKey, description: String) {
    store.draft().write().set_correction_description(key, description);
}

pub fn store_select_image(
    store: &FormStore,
    key: RowKey,
    image: ImageMeta,
    viewport_width: f64,
    config: &FormConfig,
) -> Result<Option<PreviewTicket>, FileRejection> {
    store.draft().write().select_image(key, image, viewport_width, config)
}

pub fn store_clear_image(store: &FormStore, key: RowKey) {
    store.draft().write().clear_image(key);
}

pub fn store_complete_preview(store: &FormStore, key: RowKey, ticket: PreviewTicket, data_url: String) -> bool {
    store.draft().write().complete_preview(key, ticket, data_url)
}

pub fn store_remove_preview(store: &FormStore, key: RowKey) {
    store.draft().write().remove_preview(key);
}
