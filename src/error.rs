//! Unified error types for catalog-tools.
//!
//! Normalization itself is total and degrades to documented fallback values;
//! the only fallible operations are locating the record list inside a raw
//! payload and rejecting a payload whose record list is empty.

use thiserror::Error;

/// Main error type for catalog-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CatalogError {
    /// No record list could be located anywhere in the payload.
    #[error("no record list found in payload (payload shape: {kind})")]
    NoRecordList { kind: &'static str },

    /// The payload carried a record list, but it was empty.
    #[error("payload contains an empty record list")]
    EmptyRecordList,
}

/// Convenient Result type for catalog-tools operations
pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    /// Create a "no record list" error for a payload of the given shape.
    pub fn no_record_list(kind: &'static str) -> Self {
        Self::NoRecordList { kind }
    }
}
