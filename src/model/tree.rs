//! The brand → model → parameter hierarchy derived from normalized records.
//!
//! A [`CatalogTree`] is a pure projection of a record list: it is rebuilt in
//! full whenever the records change and never mutated independently. Brand
//! and model lists are collation-sorted; parameters keep first-seen order.

use super::{CanonicalParam, Selection};
use serde::{Deserialize, Serialize};

/// One model under a brand, with its deduplicated parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelNode {
    pub name: String,
    pub params: Vec<CanonicalParam>,
}

/// One brand with its collation-sorted models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandNode {
    pub name: String,
    pub models: Vec<ModelNode>,
}

impl BrandNode {
    /// Look up a model by exact display name.
    #[must_use]
    pub fn model(&self, name: &str) -> Option<&ModelNode> {
        self.models.iter().find(|model| model.name == name)
    }
}

/// The full navigation tree, brands in collation order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogTree {
    pub brands: Vec<BrandNode>,
}

impl CatalogTree {
    /// Number of brands in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.brands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }

    /// Look up a brand by exact display name.
    #[must_use]
    pub fn brand(&self, name: &str) -> Option<&BrandNode> {
        self.brands.iter().find(|brand| brand.name == name)
    }

    /// Total number of parameters across all models.
    #[must_use]
    pub fn param_count(&self) -> usize {
        self.brands
            .iter()
            .flat_map(|brand| &brand.models)
            .map(|model| model.params.len())
            .sum()
    }

    /// Whether the selection refers to nodes that exist in this tree.
    ///
    /// An empty selection is trivially contained.
    #[must_use]
    pub fn contains(&self, selection: &Selection) -> bool {
        match selection {
            Selection::None => true,
            Selection::Brand { brand } => self.brand(brand).is_some(),
            Selection::Model { brand, model } => self
                .brand(brand)
                .is_some_and(|node| node.model(model).is_some()),
            Selection::Param {
                brand,
                model,
                param,
            } => self
                .brand(brand)
                .and_then(|node| node.model(model))
                .is_some_and(|node| node.params.iter().any(|p| p.name == *param)),
        }
    }
}
