//! End-to-end payload processing.
//!
//! Ties the stages together: envelope unwrap → record normalization → tree
//! projection. Callers that need the intermediate record list (for name
//! filtering or diff source lookup) use [`normalize_payload`];
//! [`tree_from_payload`] goes straight to the navigation tree.

use crate::error::{CatalogError, Result};
use crate::model::{CatalogTree, NormalizedRecord, RawValue};
use crate::normalize::{normalize_list, record_list};
use crate::tree::build_tree;

/// Unwrap the payload envelope and normalize every record in order.
///
/// # Errors
///
/// [`CatalogError::NoRecordList`] when the payload holds no sequence
/// anywhere, [`CatalogError::EmptyRecordList`] when a list is found but has
/// no records.
pub fn normalize_payload(payload: &RawValue) -> Result<Vec<NormalizedRecord>> {
    let records = record_list(payload)?;
    if records.is_empty() {
        return Err(CatalogError::EmptyRecordList);
    }
    let normalized = normalize_list(records);
    tracing::debug!(records = normalized.len(), "normalized payload");
    Ok(normalized)
}

/// Build the catalog tree straight from a raw payload.
///
/// # Errors
///
/// Same failure cases as [`normalize_payload`].
pub fn tree_from_payload(payload: &RawValue) -> Result<CatalogTree> {
    normalize_payload(payload).map(|records| build_tree(&records))
}
