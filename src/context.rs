//! Form Context
//!
//! Shared, non-form state provided via Leptos Context API.

use form_model::FormConfig;
use leptos::prelude::*;
use leptos_viewport::ViewportSignals;

/// Page-wide settings and viewport signals
#[derive(Clone, Copy)]
pub struct FormContext {
    /// Effective configuration (defaults merged with page overrides)
    pub config: StoredValue<FormConfig>,
    /// Viewport width and keyboard state
    pub viewport: ViewportSignals,
    /// Mobile as decided at start-up
    pub mobile: bool,
}

impl FormContext {
    pub fn new(config: FormConfig, viewport: ViewportSignals, mobile: bool) -> Self {
        Self {
            config: StoredValue::new(config),
            viewport,
            mobile,
        }
    }

    /// Clone of the configuration
    pub fn config(&self) -> FormConfig {
        self.config.get_value()
    }

    /// Read one value out of the configuration
    pub fn with_config<R>(&self, f: impl FnOnce(&FormConfig) -> R) -> R {
        self.config.with_value(f)
    }
}

/// Get the form context
pub fn use_form_context() -> FormContext {
    expect_context::<FormContext>()
}
