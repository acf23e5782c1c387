//! Whole-record normalization.

use super::fields::{resolve_field, resolve_text, NAME_KEYS, PARAM_SOURCE_KEYS, RECORD_ID_KEYS};
use super::params::extract_params;
use crate::model::{NormalizedRecord, RawValue};

/// Placeholder brand for records that carry no usable `brand` field.
pub const FALLBACK_BRAND: &str = "no brand";

/// Placeholder model for records that carry no usable `model` field.
pub const FALLBACK_MODEL: &str = "no model";

/// Reduce one raw record to the fixed normalized shape.
///
/// The display name and id resolve through the case-variant candidate lists
/// with positional fallbacks (`Item <n>` and `<name>-<index>`). `brand` and
/// `model` are read only from their literal lowercase field names; a missing,
/// null, empty-string or composite value degrades to the sentinel
/// placeholder. Parameters come strictly from a `params`/`Params` field.
///
/// Total: malformed input produces fallback values, never an error.
#[must_use]
pub fn normalize_record(raw: &RawValue, index: usize) -> NormalizedRecord {
    let name =
        resolve_text(raw, NAME_KEYS).unwrap_or_else(|| format!("Item {}", index + 1));
    let id = resolve_text(raw, RECORD_ID_KEYS).unwrap_or_else(|| format!("{name}-{index}"));

    NormalizedRecord {
        id,
        brand: scalar_field_text(raw, "brand", FALLBACK_BRAND),
        model: scalar_field_text(raw, "model", FALLBACK_MODEL),
        params: extract_params(resolve_field(raw, PARAM_SOURCE_KEYS)),
    }
}

/// Normalize every record in order. Total, order-preserving, no filtering.
#[must_use]
pub fn normalize_list(raws: &[RawValue]) -> Vec<NormalizedRecord> {
    raws.iter()
        .enumerate()
        .map(|(index, raw)| normalize_record(raw, index))
        .collect()
}

/// Case-insensitive substring filter on resolved record names.
///
/// A blank query keeps everything; records without any resolvable name never
/// match a non-blank query. Order-preserving.
#[must_use]
pub fn filter_by_name<'a>(raws: &'a [RawValue], query: &str) -> Vec<&'a RawValue> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return raws.iter().collect();
    }
    raws.iter()
        .filter(|raw| {
            resolve_text(raw, NAME_KEYS)
                .is_some_and(|name| name.to_lowercase().contains(&needle))
        })
        .collect()
}

fn scalar_field_text(raw: &RawValue, field: &str, fallback: &str) -> String {
    match raw.get(field) {
        None | Some(RawValue::Null) => fallback.to_string(),
        Some(RawValue::Sequence(_) | RawValue::Mapping(_)) => fallback.to_string(),
        Some(RawValue::String(text)) if text.is_empty() => fallback.to_string(),
        Some(value) => value.display_text(),
    }
}
