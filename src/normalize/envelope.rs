//! Record-list discovery inside response envelopes.
//!
//! Backends wrap the record list in wildly different envelopes: a bare
//! top-level sequence, one level of `{"data": [...]}` style nesting, or a
//! deeper ad-hoc structure. Discovery probes the known envelope keys in a
//! fixed priority order and only then falls back to a depth-first search
//! for the first sequence anywhere in the payload.

use crate::error::{CatalogError, Result};
use crate::model::RawValue;

/// Envelope keys probed in priority order before the deep fallback.
pub(crate) const LIST_KEYS: &[&str] = &["data", "items", "result", "rows"];

/// Locate the record list inside `payload`.
///
/// Probes, in order: the payload itself, each of [`LIST_KEYS`] one level
/// down, then a depth-first scan of nested mappings. The first sequence
/// found wins, even an empty one.
///
/// # Errors
///
/// Returns [`CatalogError::NoRecordList`] when no sequence exists anywhere
/// in the payload.
pub fn record_list(payload: &RawValue) -> Result<&[RawValue]> {
    if let RawValue::Sequence(items) = payload {
        return Ok(items);
    }

    for key in LIST_KEYS.iter().copied() {
        if let Some(RawValue::Sequence(items)) = payload.get(key) {
            tracing::debug!(key, "record list found under envelope key");
            return Ok(items);
        }
    }

    if let Some(items) = first_sequence_deep(payload) {
        tracing::debug!("record list found by deep search");
        return Ok(items);
    }

    Err(CatalogError::no_record_list(payload.kind()))
}

/// Depth-first search for the first sequence value, in insertion order.
fn first_sequence_deep(value: &RawValue) -> Option<&[RawValue]> {
    match value {
        RawValue::Sequence(items) => Some(items),
        RawValue::Mapping(entries) => entries.values().find_map(first_sequence_deep),
        _ => None,
    }
}
