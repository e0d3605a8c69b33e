//! Conditions
//!
//! Checklist rows and their `conditions_json` serialization.

use serde::{Deserialize, Serialize};

use crate::rows::{RowArena, RowKey};

/// Serialized condition record consumed by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
    pub checked: bool,
}

/// Live state of one condition row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionRow {
    pub text: String,
    pub checked: bool,
}

impl ConditionRow {
    /// Record to submit, or None when the trimmed text is empty
    pub fn to_record(&self) -> Option<Condition> {
        let text = self.text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Condition { text: text.to_string(), checked: self.checked })
    }
}

pub fn text_input_id(key: RowKey) -> String {
    format!("condition-text-{}", key)
}

pub fn checkbox_id(key: RowKey) -> String {
    format!("condition-check-{}", key)
}

/// Collect submit-ready records in row order
pub fn collect_conditions(rows: &RowArena<ConditionRow>) -> Vec<Condition> {
    rows.iter().filter_map(|(_, row)| row.to_record()).collect()
}

/// Value for the hidden `conditions_json` field
pub fn conditions_json(rows: &RowArena<ConditionRow>) -> String {
    let records = collect_conditions(rows);
    // A Vec of plain string/bool structs cannot fail to serialize.
    serde_json::to_string(&records).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(text: &str, checked: bool) -> ConditionRow {
        ConditionRow { text: text.to_string(), checked }
    }

    #[test]
    fn test_blank_rows_excluded() {
        let mut rows = RowArena::new();
        rows.push(row("  Frenos revisados ", true));
        rows.push(row("   ", true));
        rows.push(row("", false));
        rows.push(row("Aceite", false));

        let json = conditions_json(&rows);
        let parsed: Vec<Condition> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0], Condition { text: "Frenos revisados".into(), checked: true });
        assert_eq!(parsed[1].text, "Aceite");
        assert!(!parsed[1].checked);
    }

    #[test]
    fn test_empty_list_serializes_to_empty_array() {
        let rows: RowArena<ConditionRow> = RowArena::new();
        assert_eq!(conditions_json(&rows), "[]");
    }

    #[test]
    fn test_wire_shape() {
        let mut rows = RowArena::new();
        rows.push(row("Luces", true));
        assert_eq!(conditions_json(&rows), r#"[{"text":"Luces","checked":true}]"#);
    }

    #[test]
    fn test_element_ids() {
        assert_eq!(text_input_id(RowKey(3)), "condition-text-3");
        assert_eq!(checkbox_id(RowKey(3)), "condition-check-3");
    }
}
