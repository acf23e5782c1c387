//! Candidate-key lookup over loosely-cased raw records.
//!
//! The upstream service spells field names inconsistently (`Name`, `name`,
//! `Title`, ...). Each logical field has one declarative, priority-ordered
//! candidate list; resolution walks the list and takes the first present,
//! non-null value.

use crate::model::RawValue;

/// Display-name candidates, in priority order.
pub(crate) const NAME_KEYS: &[&str] = &["Name", "name", "Title", "title", "label", "Label"];

/// Identifier candidates for parameter objects.
pub(crate) const PARAM_ID_KEYS: &[&str] = &["Id", "id", "ID"];

/// Identifier candidates for whole records.
pub(crate) const RECORD_ID_KEYS: &[&str] = &["Id", "id", "ID", "_id"];

/// Fields a record's parameter payload may live under. Other shapes on the
/// record are ignored.
pub(crate) const PARAM_SOURCE_KEYS: &[&str] = &["params", "Params"];

/// First present, non-null candidate field, if any.
///
/// An explicit null counts as absent and falls through to the next
/// candidate; any other value (including an empty string) resolves.
pub(crate) fn resolve_field<'a>(value: &'a RawValue, candidates: &[&str]) -> Option<&'a RawValue> {
    candidates.iter().find_map(|key| match value.get(key) {
        None | Some(RawValue::Null) => None,
        found => found,
    })
}

/// Resolved candidate field rendered as display text.
pub(crate) fn resolve_text(value: &RawValue, candidates: &[&str]) -> Option<String> {
    resolve_field(value, candidates).map(RawValue::display_text)
}
