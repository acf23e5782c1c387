//! Structural diff over raw catalog entities.
//!
//! The diff compares two entities field by field: the key set is the union
//! of both sides' own fields minus an ignore set, and each field compares
//! under a value-equality rule that treats NaN as self-equal and composites
//! as equal only when their serialized JSON texts match.
//!
//! # Example
//!
//! ```
//! use catalog_tools::diff::DiffEngine;
//! use catalog_tools::model::RawValue;
//!
//! let a: RawValue = serde_json::from_str(r#"{"Name": "SR11", "Density": 480}"#)?;
//! let b: RawValue = serde_json::from_str(r#"{"Name": "SR28", "Density": 480}"#)?;
//!
//! let changes = DiffEngine::new().diff(&a, &b);
//! assert_eq!(changes.len(), 1);
//! assert_eq!(changes[0].key, "Name");
//! # Ok::<(), serde_json::Error>(())
//! ```

mod engine;
mod entry;

pub use engine::{values_equal, DiffEngine};
pub use entry::{format_value, DiffEntry};
