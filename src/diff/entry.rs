//! A single field-level difference between two compared entities.

use serde::{Deserialize, Serialize};

use crate::model::RawValue;

/// One differing field: the key and the value each side holds.
///
/// A side is `None` when the entity does not carry the field at all, which
/// is distinct from carrying an explicit null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffEntry {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a: Option<RawValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b: Option<RawValue>,
}

impl DiffEntry {
    #[must_use]
    pub fn new(key: impl Into<String>, a: Option<RawValue>, b: Option<RawValue>) -> Self {
        Self {
            key: key.into(),
            a,
            b,
        }
    }
}

/// Render one side of an entry for display.
///
/// Missing fields render as `undefined`, explicit nulls as `null`, strings
/// bare, and composites as their serialized JSON text.
#[must_use]
pub fn format_value(value: Option<&RawValue>) -> String {
    value.map_or_else(|| "undefined".to_string(), RawValue::display_text)
}
