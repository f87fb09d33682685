// Common validation types shared across all form modules

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Normalized value a validator hands back alongside a passing result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Integer(i64),
    DateTime(NaiveDateTime),
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(value: NaiveDateTime) -> Self {
        FieldValue::DateTime(value)
    }
}

/// Outcome of a single field validator.
///
/// An error (`message`) blocks submission; a warning is advisory and the
/// result still counts as valid. `value` carries the normalized/trimmed
/// input when valid, and is absent for optional fields left empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldResult {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,
}

impl FieldResult {
    pub fn valid(value: impl Into<FieldValue>) -> Self {
        Self {
            is_valid: true,
            message: None,
            warning: None,
            value: Some(value.into()),
        }
    }

    /// Valid with no value - an optional field the user left empty.
    pub fn valid_empty() -> Self {
        Self {
            is_valid: true,
            message: None,
            warning: None,
            value: None,
        }
    }

    pub fn valid_with_warning(value: impl Into<FieldValue>, warning: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            message: None,
            warning: Some(warning.into()),
            value: Some(value.into()),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: Some(message.into()),
            warning: None,
            value: None,
        }
    }
}

/// Aggregate result of validating one form submission.
#[derive(Debug, Clone, Serialize)]
pub struct FormValidationResult {
    pub is_valid: bool,
    pub errors: HashMap<String, String>,
    pub warnings: HashMap<String, String>,
}

impl FormValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: HashMap::new(),
            warnings: HashMap::new(),
        }
    }

    pub fn add_error(&mut self, field: &str, message: impl Into<String>) {
        self.is_valid = false;
        self.errors.insert(field.to_string(), message.into());
    }

    pub fn add_warning(&mut self, field: &str, message: impl Into<String>) {
        self.warnings.insert(field.to_string(), message.into());
    }
}

/// Snapshot of raw form-control values, keyed by field name.
///
/// Values are whatever the HTML controls produce (`datetime-local` strings,
/// numeric strings, plain text). A field can be absent entirely - form-level
/// validation skips absent fields, since a mounted form submits every control
/// it renders (required fields arrive as empty strings, not missing keys).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormData(HashMap<String, String>);

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: &str, value: &str) -> &mut Self {
        self.0.insert(field.to_string(), value.to_string());
        self
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Missing keys read as the empty string, mirroring an untouched control.
    pub fn get_or_empty(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }
}

impl<'a, const N: usize> From<[(&'a str, &'a str); N]> for FormData {
    fn from(fields: [(&'a str, &'a str); N]) -> Self {
        let mut data = FormData::new();
        for (field, value) in fields {
            data.set(field, value);
        }
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_error_marks_result_invalid() {
        let mut result = FormValidationResult::new();
        assert!(result.is_valid);

        result.add_error("title", "Title is required");
        assert!(!result.is_valid);
        assert_eq!(result.errors.get("title").map(String::as_str), Some("Title is required"));
    }

    #[test]
    fn test_add_warning_keeps_result_valid() {
        let mut result = FormValidationResult::new();
        result.add_warning("start_time", "Outside business hours");
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_form_data_absent_vs_empty() {
        let data = FormData::from([("title", "")]);
        assert!(data.contains("title"));
        assert!(!data.contains("description"));
        assert_eq!(data.get_or_empty("description"), "");
    }
}
