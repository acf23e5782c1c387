//! Field-level structural diff implementation.

use std::collections::HashSet;

use indexmap::IndexSet;

use super::entry::DiffEntry;
use crate::model::RawValue;

/// Default set of bookkeeping fields excluded from every comparison.
const DEFAULT_IGNORED_KEYS: &[&str] = &["__typename"];

/// Structural diff engine for comparing two raw catalog entities.
///
/// The engine walks the union of both entities' field names in insertion
/// order (left side first, then the right side's unseen keys) and reports
/// one [`DiffEntry`] per field where the sides disagree under
/// [`values_equal`].
pub struct DiffEngine {
    ignored_keys: HashSet<String>,
}

impl DiffEngine {
    /// Create a new diff engine with the default ignore set
    #[must_use]
    pub fn new() -> Self {
        Self {
            ignored_keys: DEFAULT_IGNORED_KEYS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    /// Replace the ignored key set
    #[must_use]
    pub fn with_ignored_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.ignored_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Compare two entities field by field.
    ///
    /// Non-mapping sides contribute no fields, so diffing two scalars yields
    /// an empty result. Entry order follows the key union's insertion order,
    /// never a sort.
    #[must_use]
    pub fn diff(&self, a: &RawValue, b: &RawValue) -> Vec<DiffEntry> {
        let mut keys: IndexSet<&str> = IndexSet::new();
        if let Some(entries) = a.as_mapping() {
            keys.extend(entries.keys().map(String::as_str));
        }
        if let Some(entries) = b.as_mapping() {
            keys.extend(entries.keys().map(String::as_str));
        }
        keys.retain(|key| !self.ignored_keys.contains(*key));

        keys.into_iter()
            .filter_map(|key| {
                let left = a.get(key);
                let right = b.get(key);
                if field_equal(left, right) {
                    None
                } else {
                    Some(DiffEntry::new(key, left.cloned(), right.cloned()))
                }
            })
            .collect()
    }

    /// Whether two entities are equal under this engine's ignore set.
    #[must_use]
    pub fn entities_equal(&self, a: &RawValue, b: &RawValue) -> bool {
        self.diff(a, b).is_empty()
    }
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn field_equal(a: Option<&RawValue>, b: Option<&RawValue>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(left), Some(right)) => values_equal(left, right),
        _ => false,
    }
}

/// Value equality as the diff sees it.
///
/// Two NaN numbers count as equal. Composites compare by their serialized
/// JSON text, which makes sequence order and mapping key order significant;
/// a side that fails to serialize is never equal. Values of different kinds
/// are never equal.
#[must_use]
pub fn values_equal(a: &RawValue, b: &RawValue) -> bool {
    if a.is_composite() || b.is_composite() {
        return match (serde_json::to_string(a), serde_json::to_string(b)) {
            (Ok(left), Ok(right)) => left == right,
            _ => false,
        };
    }
    match (a, b) {
        (RawValue::Null, RawValue::Null) => true,
        (RawValue::Bool(left), RawValue::Bool(right)) => left == right,
        (RawValue::String(left), RawValue::String(right)) => left == right,
        (RawValue::Number(left), RawValue::Number(right)) => {
            left == right || (left.is_nan() && right.is_nan())
        }
        _ => false,
    }
}
