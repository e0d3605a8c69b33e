//! Style Injection

use super::{document, js_err};

const MARKER_ATTR: &str = "data-error-styles";

const FORM_CSS: &str = r#"
.error {
    border-color: #dc3545 !important;
    box-shadow: 0 0 0 3px rgba(220, 53, 69, 0.1) !important;
}

.keyboard-open {
    padding-bottom: 0;
}

.image-preview {
    text-align: center;
    padding: 10px;
    background-color: #f8f9fa;
    border-radius: 4px;
    margin-top: 10px;
}

@media (max-width: 768px) {
    .keyboard-open .footer {
        display: none;
    }
}

#loading-overlay {
    position: fixed !important;
    top: 0 !important;
    left: 0 !important;
    width: 100% !important;
    height: 100% !important;
    background: rgba(0,0,0,0.7) !important;
    z-index: 9999 !important;
    display: none !important;
    align-items: center !important;
    justify-content: center !important;
}
"#;

/// Add the form's style block to `<head>` unless a previous load did
pub fn inject_styles_once() -> Result<(), String> {
    let doc = document()?;
    let selector = format!("style[{}]", MARKER_ATTR);
    if doc.query_selector(&selector).map_err(js_err)?.is_some() {
        return Ok(());
    }
    let style = doc.create_element("style").map_err(js_err)?;
    style.set_attribute(MARKER_ATTR, "true").map_err(js_err)?;
    style.set_text_content(Some(FORM_CSS));
    let head = doc.head().ok_or_else(|| "no <head>".to_string())?;
    head.append_child(&style).map_err(js_err)?;
    Ok(())
}
