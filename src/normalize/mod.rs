//! Normalization of heterogeneous raw records.
//!
//! Raw catalog payloads arrive with inconsistent casing, missing fields and
//! parameter lists in several competing shapes. This module reduces them to
//! the fixed [`NormalizedRecord`](crate::model::NormalizedRecord) form:
//! envelope unwrapping, field resolution across case-variant candidates,
//! parameter extraction and placeholder synthesis for anything absent.

mod envelope;
mod fields;
mod params;
mod record;

pub use envelope::record_list;
pub use params::extract_params;
pub use record::{
    filter_by_name, normalize_list, normalize_record, FALLBACK_BRAND, FALLBACK_MODEL,
};
