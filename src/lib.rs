//! **Normalization, tree projection and structural diffing for loosely-typed catalog data.**
//!
//! `catalog-tools` turns the messy record lists returned by catalog backends into two
//! predictable structures: a deduplicated, locale-sorted brand → model → parameter tree
//! for navigation, and a field-level structural diff between two selected entries.
//!
//! Backends in the wild disagree about everything. The record list may arrive bare or
//! wrapped in an envelope, parameters may be plain strings one day and objects the next,
//! and field names change casing between deployments. The library absorbs all of that:
//! every operation is total over arbitrary JSON-shaped input and degrades to deterministic
//! placeholders instead of failing.
//!
//! ## Key Features
//!
//! - **Envelope tolerance**: Finds the record list whether the payload is a bare array,
//!   wrapped under a known envelope key (`data`, `items`, `result`, `rows`), or buried
//!   deeper in the response.
//! - **Total normalization**: Every record reduces to the same fixed shape. Missing names
//!   and ids get positional fallbacks, missing brands and models get sentinel placeholders.
//! - **Canonical identity**: Case- and diacritic-insensitive keys drive parameter
//!   deduplication and give every parameter a stable id that survives rebuilds.
//! - **Locale-aware ordering**: Brands and models sort the way a Russian-speaking reader
//!   expects, with Latin names grouped before Cyrillic ones and ё collating next to е.
//! - **Structural diffing**: Field-level comparison with an ignore set, NaN-tolerant
//!   numeric equality and order-sensitive composite comparison.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The data structures everything else works on. [`RawValue`] is the
//!   loosely-typed input value, [`NormalizedRecord`] the fixed record shape, and
//!   [`CatalogTree`] the derived navigation hierarchy.
//! - **[`normalize`]**: Envelope discovery plus record and parameter normalization. This
//!   is where heterogeneous input becomes uniform.
//! - **[`text`]**: Canonical key folding and the collation used for display ordering.
//! - **[`tree`]**: Projection of normalized records into the [`CatalogTree`].
//! - **[`diff`]**: The [`DiffEngine`] comparing two raw entities field by field.
//! - **[`pipeline`]**: Convenience entry points going straight from a raw payload to
//!   normalized records or a finished tree.
//!
//! ## Getting Started: From Payload to Tree
//!
//! ```
//! use catalog_tools::model::RawValue;
//! use catalog_tools::pipeline::tree_from_payload;
//!
//! let payload: RawValue = serde_json::from_str(
//!     r#"{
//!         "data": [
//!             {"Name": "SR11", "brand": "Getzner", "model": "Sylomer",
//!              "params": ["Thickness 12.5 mm", "Density 480 kg/m3"]},
//!             {"Name": "SR28", "brand": "Getzner", "model": "Sylomer",
//!              "params": ["thickness 12.5 MM", "Static load limit"]}
//!         ]
//!     }"#,
//! )?;
//!
//! let tree = tree_from_payload(&payload)?;
//! let brand = tree.brand("Getzner").ok_or("missing brand")?;
//! let model = brand.model("Sylomer").ok_or("missing model")?;
//!
//! // The case variant of "Thickness 12.5 mm" deduplicated away.
//! assert_eq!(model.params.len(), 3);
//! assert_eq!(model.params[0].name, "Thickness 12.5 mm");
//! assert_eq!(model.params[0].id, "getzner__sylomer__thickness-125-mm");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Diffing Two Entries
//!
//! ```
//! use catalog_tools::diff::{format_value, DiffEngine};
//! use catalog_tools::model::RawValue;
//!
//! let a: RawValue = serde_json::from_str(
//!     r#"{"__typename": "Material", "Name": "Sylomer SR11", "Density": 480}"#,
//! )?;
//! let b: RawValue = serde_json::from_str(
//!     r#"{"__typename": "Product", "Name": "Sylomer SR28", "Density": 480}"#,
//! )?;
//!
//! let changes = DiffEngine::new().diff(&a, &b);
//! assert_eq!(changes.len(), 1, "__typename is ignored, Density is equal");
//! assert_eq!(changes[0].key, "Name");
//! assert_eq!(format_value(changes[0].a.as_ref()), "Sylomer SR11");
//! # Ok::<(), serde_json::Error>(())
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Number rendering casts f64 to i64 only inside the safe-integer range
    clippy::cast_possible_truncation,
    // Diff equality compares numbers exactly on purpose (NaN handled separately)
    clippy::float_cmp
)]

pub mod diff;
pub mod error;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod text;
pub mod tree;

// Re-export main types for convenience
pub use diff::{format_value, values_equal, DiffEngine, DiffEntry};
pub use error::{CatalogError, Result};
pub use model::{
    BrandNode, CanonicalParam, CatalogTree, ModelNode, NormalizedRecord, RawValue, Selection,
};
pub use normalize::{
    extract_params, filter_by_name, normalize_list, normalize_record, record_list,
    FALLBACK_BRAND, FALLBACK_MODEL,
};
pub use pipeline::{normalize_payload, tree_from_payload};
pub use text::{canonical_key, collate, CollationKey, KEY_SEPARATOR};
pub use tree::build_tree;
