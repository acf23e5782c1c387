//! Parameter extraction from raw values of arbitrary shape.

use super::fields::{resolve_text, NAME_KEYS, PARAM_ID_KEYS};
use crate::model::{CanonicalParam, RawValue};

/// Normalize one raw parameter payload into canonical `{id, name}` pairs.
///
/// Policy by shape:
/// - absent or null: no parameters;
/// - string: one parameter named by the trimmed text (empty after trimming
///   means none);
/// - sequence: one parameter per element, names resolved from candidate keys
///   with positional placeholders as fallback;
/// - mapping: one readable `key: value` parameter per entry;
/// - any other scalar: no parameters.
///
/// Total over every input; output length is bounded by the input length.
#[must_use]
pub fn extract_params(raw: Option<&RawValue>) -> Vec<CanonicalParam> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    match raw {
        RawValue::String(text) => {
            let name = text.trim();
            if name.is_empty() {
                Vec::new()
            } else {
                vec![CanonicalParam::new("param-0", name)]
            }
        }
        RawValue::Sequence(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| param_from_element(item, index))
            .collect(),
        RawValue::Mapping(entries) => entries
            .iter()
            .enumerate()
            .map(|(index, (key, value))| param_from_entry(key, value, index))
            .collect(),
        RawValue::Null | RawValue::Bool(_) | RawValue::Number(_) => Vec::new(),
    }
}

/// One sequence element.
///
/// The name may still be blank here (e.g. a whitespace-only string element);
/// tree building drops blanks later.
fn param_from_element(element: &RawValue, index: usize) -> CanonicalParam {
    match element {
        RawValue::String(text) => CanonicalParam::new(format!("param-{index}"), text.trim()),
        RawValue::Mapping(_) | RawValue::Sequence(_) => {
            let name = resolve_text(element, NAME_KEYS)
                .unwrap_or_else(|| format!("Parameter {}", index + 1));
            // The id fallback keeps the untrimmed name, the stored name is trimmed.
            let id = resolve_text(element, PARAM_ID_KEYS)
                .unwrap_or_else(|| format!("{name}-{index}"));
            CanonicalParam::new(id, name.trim())
        }
        other => CanonicalParam::new(format!("param-{index}"), other.display_text()),
    }
}

/// One mapping entry, rendered as a readable `key: value` label.
fn param_from_entry(key: &str, value: &RawValue, index: usize) -> CanonicalParam {
    CanonicalParam::new(
        format!("{key}-{index}"),
        format!("{key}: {}", value.display_text()),
    )
}
