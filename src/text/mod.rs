//! Text canonicalization and locale-aware ordering.
//!
//! Two concerns live here: [`canonical_key`] folds free-form names into the
//! canonical identity used for deduplication and stable ids, and
//! [`CollationKey`] orders display names the way a Russian-locale reader
//! expects (Latin before Cyrillic, ё adjacent to е, case as a tiebreak).

mod collate;
mod key;

pub use collate::{collate, CollationKey};
pub use key::{canonical_key, KEY_SEPARATOR};
