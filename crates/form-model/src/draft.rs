//! Report Draft
//!
//! Single source of truth for everything the form shows. The view is
//! derived from this; nothing is read back from the DOM.

use crate::condition::{self, ConditionRow};
use crate::config::FormConfig;
use crate::correction::{self, CorrectionRow};
use crate::error::FileRejection;
use crate::rows::{RowArena, RowKey};
use crate::upload::{self, Accepted, ImageMeta, PreviewTicket};

/// Header fields of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneralField {
    Fecha,
    Cliente,
    Equipo,
    Kilometraje,
    Horas,
}

impl GeneralField {
    /// Form order
    pub const ALL: [GeneralField; 5] = [
        GeneralField::Fecha,
        GeneralField::Cliente,
        GeneralField::Equipo,
        GeneralField::Kilometraje,
        GeneralField::Horas,
    ];

    /// Form field name, also used as element id
    pub fn name(self) -> &'static str {
        match self {
            GeneralField::Fecha => "fecha",
            GeneralField::Cliente => "cliente",
            GeneralField::Equipo => "equipo",
            GeneralField::Kilometraje => "kilometraje",
            GeneralField::Horas => "horas",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GeneralField::Fecha => "Fecha",
            GeneralField::Cliente => "Cliente",
            GeneralField::Equipo => "Equipo",
            GeneralField::Kilometraje => "Kilometraje",
            GeneralField::Horas => "Horas",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            GeneralField::Fecha => "date",
            _ => "text",
        }
    }

    pub fn required(self) -> bool {
        matches!(self, GeneralField::Fecha | GeneralField::Cliente | GeneralField::Equipo)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneralInfo {
    pub fecha: String,
    pub cliente: String,
    pub equipo: String,
    pub kilometraje: String,
    pub horas: String,
}

impl GeneralInfo {
    pub fn get(&self, field: GeneralField) -> &str {
        match field {
            GeneralField::Fecha => &self.fecha,
            GeneralField::Cliente => &self.cliente,
            GeneralField::Equipo => &self.equipo,
            GeneralField::Kilometraje => &self.kilometraje,
            GeneralField::Horas => &self.horas,
        }
    }

    pub fn set(&mut self, field: GeneralField, value: String) {
        let slot = match field {
            GeneralField::Fecha => &mut self.fecha,
            GeneralField::Cliente => &mut self.cliente,
            GeneralField::Equipo => &mut self.equipo,
            GeneralField::Kilometraje => &mut self.kilometraje,
            GeneralField::Horas => &mut self.horas,
        };
        *slot = value;
    }
}

/// Whole form state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportDraft {
    pub general: GeneralInfo,
    pub conditions: RowArena<ConditionRow>,
    pub corrections: RowArena<CorrectionRow>,
}

impl ReportDraft {
    /// Draft as first shown: one empty row in each list
    pub fn new(today: &str) -> Self {
        let mut draft = Self::default();
        draft.general.fecha = today.to_string();
        draft.add_condition();
        draft.add_correction();
        draft
    }

    // ========================
    // Conditions
    // ========================

    pub fn add_condition(&mut self) -> RowKey {
        let key = self.conditions.push(ConditionRow::default());
        tracing::debug!(%key, total = self.conditions.len(), "condition added");
        key
    }

    pub fn remove_condition(&mut self, key: RowKey) -> Option<ConditionRow> {
        let removed = self.conditions.remove(key);
        if removed.is_some() {
            tracing::debug!(%key, total = self.conditions.len(), "condition removed");
        }
        removed
    }

    pub fn set_condition_text(&mut self, key: RowKey, text: String) {
        if let Some(row) = self.conditions.get_mut(key) {
            row.text = text;
        }
    }

    pub fn set_condition_checked(&mut self, key: RowKey, checked: bool) {
        if let Some(row) = self.conditions.get_mut(key) {
            row.checked = checked;
        }
    }

    /// Value of the hidden `conditions_json` input
    pub fn conditions_json(&self) -> String {
        condition::conditions_json(&self.conditions)
    }

    // ========================
    // Corrections
    // ========================

    pub fn add_correction(&mut self) -> RowKey {
        let key = self.corrections.push(CorrectionRow::default());
        tracing::debug!(%key, total = self.corrections.len(), "correction added");
        key
    }

    /// Remove a correction; remaining placeholders renumber by position
    pub fn remove_correction(&mut self, key: RowKey) -> Option<CorrectionRow> {
        let removed = self.corrections.remove(key);
        if removed.is_some() {
            tracing::debug!(%key, total = self.corrections.len(), "correction removed");
        }
        removed
    }

    /// Live correction count
    pub fn correction_count(&self) -> usize {
        self.corrections.len()
    }

    pub fn set_correction_title(&mut self, key: RowKey, title: String) {
        if let Some(row) = self.corrections.get_mut(key) {
            row.title = title;
        }
    }

    pub fn set_correction_description(&mut self, key: RowKey, description: String) {
        if let Some(row) = self.corrections.get_mut(key) {
            row.description = description;
        }
    }

    pub fn correction_placeholder(&self, key: RowKey, label: &str) -> Option<String> {
        correction::placeholder_for(&self.corrections, key, label)
    }

    /// Record a file selection. On rejection the row's image and preview
    /// are dropped and the caller must clear the file input. On acceptance
    /// a ticket is returned when a preview read should start.
    pub fn select_image(
        &mut self,
        key: RowKey,
        image: ImageMeta,
        viewport_width: f64,
        config: &FormConfig,
    ) -> Result<Option<PreviewTicket>, FileRejection> {
        let Some(row) = self.corrections.get_mut(key) else {
            return Ok(None);
        };
        match upload::classify(config, &image, viewport_width) {
            Err(rejection) => {
                tracing::warn!(%key, name = %image.name, %rejection, "image rejected");
                row.image = None;
                row.preview.clear();
                Err(rejection)
            }
            Ok(accepted) => {
                tracing::debug!(%key, name = %image.name, size = image.size, "image accepted");
                row.image = Some(image);
                match accepted {
                    Accepted::WithPreview => Ok(Some(row.preview.begin())),
                    Accepted::Plain => {
                        // a preview from an earlier narrow-viewport pick no longer matches the file
                        row.preview.clear();
                        Ok(None)
                    }
                }
            }
        }
    }

    /// The file input was emptied by the user
    pub fn clear_image(&mut self, key: RowKey) {
        if let Some(row) = self.corrections.get_mut(key) {
            row.image = None;
            row.preview.clear();
        }
    }

    /// Land a finished preview read. False if stale or the row is gone.
    pub fn complete_preview(&mut self, key: RowKey, ticket: PreviewTicket, data_url: String) -> bool {
        self.corrections
            .get_mut(key)
            .map(|row| row.preview.complete(ticket, data_url))
            .unwrap_or(false)
    }

    /// "Quitar imagen": drop preview and selection together
    pub fn remove_preview(&mut self, key: RowKey) {
        self.clear_image(key);
    }

    // ========================
    // Validation
    // ========================

    /// Required general fields that are blank after trimming, in form order
    pub fn missing_required(&self) -> Vec<GeneralField> {
        GeneralField::ALL
            .into_iter()
            .filter(|f| f.required() && self.general.get(*f).trim().is_empty())
            .collect()
    }
}
