//! Page Queries

use super::document;

/// Marker the server's result page renders
const SUCCESS_MARKER: &str = ".card-header.bg-success";

/// Whether this document is the result page shown after a submission
pub fn is_result_page() -> bool {
    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    if path.contains("result") {
        return true;
    }
    document()
        .ok()
        .and_then(|d| d.query_selector(SUCCESS_MARKER).ok().flatten())
        .is_some()
}

/// `document.readyState == "complete"`
pub fn is_loaded() -> bool {
    document().map(|d| d.ready_state() == "complete").unwrap_or(false)
}

/// Text content of an element, used for inline JSON documents
pub fn element_text(id: &str) -> Option<String> {
    document().ok()?.get_element_by_id(id)?.text_content()
}

/// Local date as `YYYY-MM-DD`
pub fn today_iso() -> String {
    let now = js_sys::Date::new_0();
    format!("{:04}-{:02}-{:02}", now.get_full_year(), now.get_month() + 1, now.get_date())
}
