//! Projection of normalized records into the navigation tree.

mod builder;

pub use builder::build_tree;
