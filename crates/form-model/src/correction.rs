//! Corrections
//!
//! Repair rows carried to the server as multipart fields. The image bytes
//! stay in the browser's file input; the model only keeps its metadata and
//! the preview slot.

use crate::rows::{RowArena, RowKey};
use crate::upload::{ImageMeta, PreviewSlot};

/// Multipart field names read by the server
pub const TITLE_FIELD: &str = "corrections_title[]";
pub const DESC_FIELD: &str = "corrections_desc[]";
pub const IMAGE_FIELD: &str = "corrections_img[]";

/// Live state of one correction row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorrectionRow {
    pub title: String,
    pub description: String,
    pub image: Option<ImageMeta>,
    pub preview: PreviewSlot,
}

impl CorrectionRow {
    /// Whether the user typed a title of their own
    pub fn has_custom_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

pub fn title_input_id(key: RowKey) -> String {
    format!("correction-title-{}", key)
}

pub fn file_input_id(key: RowKey) -> String {
    format!("correction-file-{}", key)
}

pub fn description_id(key: RowKey) -> String {
    format!("correction-desc-{}", key)
}

/// Placeholder shown in an empty title field, numbered by 1-based position
pub fn placeholder(label: &str, position: usize) -> String {
    format!("{} {}", label, position + 1)
}

/// Placeholder for a live row, None if the key is gone
pub fn placeholder_for(rows: &RowArena<CorrectionRow>, key: RowKey, label: &str) -> Option<String> {
    rows.position(key).map(|pos| placeholder(label, pos))
}

/// Placeholders of every row in order
pub fn placeholders(rows: &RowArena<CorrectionRow>, label: &str) -> Vec<(RowKey, String)> {
    rows.keys()
        .into_iter()
        .enumerate()
        .map(|(pos, key)| (key, placeholder(label, pos)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_one_based() {
        assert_eq!(placeholder("Corrección", 0), "Corrección 1");
        assert_eq!(placeholder("Corrección", 4), "Corrección 5");
    }

    #[test]
    fn test_element_ids() {
        let key = RowKey(7);
        assert_eq!(title_input_id(key), "correction-title-7");
        assert_eq!(file_input_id(key), "correction-file-7");
        assert_eq!(description_id(key), "correction-desc-7");
    }

    #[test]
    fn test_custom_title_detection() {
        let mut row = CorrectionRow::default();
        assert!(!row.has_custom_title());
        row.title = "   ".into();
        assert!(!row.has_custom_title());
        row.title = "Cambio de filtro".into();
        assert!(row.has_custom_title());
    }
}
