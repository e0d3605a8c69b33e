//! Form Configuration
//!
//! Every tunable of the form in one place. The hosting page may override
//! any subset through a JSON document; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, FileRejection};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Form `action` URL
    pub action: String,
    pub allowed_image_types: Vec<String>,
    pub max_upload_bytes: u64,
    /// Viewports at or below this width count as mobile
    pub mobile_breakpoint_px: f64,
    pub preview_max_px: u32,
    pub resize_debounce_ms: u32,
    /// Height loss that counts as an on-screen keyboard
    pub keyboard_threshold_px: f64,
    pub focus_delay_ms: u32,
    pub scroll_delay_ms: u32,
    pub submit_timeout_ms: u32,
    pub labels: Labels,
}

/// User-facing text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub submit: String,
    pub submitting: String,
    pub correction_placeholder: String,
    pub remove_preview: String,
    pub add_condition: String,
    pub add_correction: String,
    pub required_missing: String,
    pub invalid_type: String,
    pub too_large: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            action: "/submit".to_string(),
            allowed_image_types: ["image/png", "image/jpeg", "image/jpg", "image/gif", "image/webp"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_upload_bytes: 32 * 1024 * 1024,
            mobile_breakpoint_px: 768.0,
            preview_max_px: 150,
            resize_debounce_ms: 250,
            keyboard_threshold_px: 150.0,
            focus_delay_ms: 100,
            scroll_delay_ms: 300,
            submit_timeout_ms: 30_000,
            labels: Labels::default(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            submit: "Generar Reporte DOCX".to_string(),
            submitting: "Generando reporte...".to_string(),
            correction_placeholder: "Corrección".to_string(),
            remove_preview: "Quitar imagen".to_string(),
            add_condition: "+ Agregar condición".to_string(),
            add_correction: "+ Agregar corrección".to_string(),
            required_missing: "Por favor completa todos los campos obligatorios (marcados con *)".to_string(),
            invalid_type: "Por favor selecciona un archivo de imagen válido (PNG, JPG, JPEG, GIF, WEBP)".to_string(),
            too_large: "El archivo es demasiado grande. Tamaño máximo: 32MB".to_string(),
        }
    }
}

impl Labels {
    /// Alert text for a refused file
    pub fn rejection(&self, rejection: &FileRejection) -> &str {
        match rejection {
            FileRejection::UnsupportedType { .. } => &self.invalid_type,
            FileRejection::TooLarge { .. } => &self.too_large,
        }
    }
}

impl FormConfig {
    /// Parse and validate a page-supplied override document
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: FormConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.allowed_image_types.is_empty() {
            return Err(ConfigError::Invalid("allowed_image_types is empty"));
        }
        if self.max_upload_bytes == 0 {
            return Err(ConfigError::Invalid("max_upload_bytes must be positive"));
        }
        if self.submit_timeout_ms == 0 {
            return Err(ConfigError::Invalid("submit_timeout_ms must be positive"));
        }
        if self.action.trim().is_empty() {
            return Err(ConfigError::Invalid("action is empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_behaviour() {
        let config = FormConfig::default();
        assert_eq!(config.max_upload_bytes, 33_554_432);
        assert_eq!(config.submit_timeout_ms, 30_000);
        assert_eq!(config.resize_debounce_ms, 250);
        assert_eq!(config.allowed_image_types.len(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = FormConfig::from_json(r#"{"action": "/reportes", "labels": {"submit": "Enviar"}}"#).unwrap();
        assert_eq!(config.action, "/reportes");
        assert_eq!(config.labels.submit, "Enviar");
        assert_eq!(config.labels.submitting, "Generando reporte...");
        assert_eq!(config.mobile_breakpoint_px, 768.0);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(FormConfig::from_json("{nope"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_invalid_values() {
        let err = FormConfig::from_json(r#"{"allowed_image_types": []}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(FormConfig::from_json(r#"{"submit_timeout_ms": 0}"#).is_err());
    }

    #[test]
    fn test_rejection_labels() {
        let labels = Labels::default();
        let text = labels.rejection(&FileRejection::TooLarge { size: 1, max: 0 });
        assert!(text.contains("32MB"));
        let text = labels.rejection(&FileRejection::UnsupportedType { mime: "x".into() });
        assert!(text.contains("WEBP"));
    }
}
