//! Data model for normalized catalog content.
//!
//! Raw service responses arrive as [`RawValue`] and are reduced to
//! [`NormalizedRecord`] lists, from which the [`CatalogTree`] projection is
//! rebuilt on every change. [`Selection`] carries the presentation layer's
//! active node.

mod raw;
mod record;
mod selection;
mod tree;

pub use raw::*;
pub use record::*;
pub use selection::*;
pub use tree::*;
