//! Page Configuration
//!
//! Reads optional overrides from
//! `<script type="application/json" id="report-form-config">`.

use form_model::FormConfig;

use crate::browser;

pub const CONFIG_ELEMENT_ID: &str = "report-form-config";

/// Defaults merged with whatever the page supplies
pub fn load_config() -> FormConfig {
    match browser::element_text(CONFIG_ELEMENT_ID) {
        None => FormConfig::default(),
        Some(raw) => resolve(&raw),
    }
}

/// Parse an override document, falling back to defaults when it is invalid
fn resolve(raw: &str) -> FormConfig {
    if raw.trim().is_empty() {
        return FormConfig::default();
    }
    match FormConfig::from_json(raw) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring invalid page config");
            FormConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_document_uses_defaults() {
        assert_eq!(resolve("  \n"), FormConfig::default());
    }

    #[test]
    fn test_invalid_document_uses_defaults() {
        assert_eq!(resolve(r#"{"max_upload_bytes": 0}"#), FormConfig::default());
        assert_eq!(resolve("not json"), FormConfig::default());
    }

    #[test]
    fn test_override_applied() {
        let config = resolve(r#"{"submit_timeout_ms": 45000}"#);
        assert_eq!(config.submit_timeout_ms, 45_000);
    }
}
