//! Selection state passed in by the presentation layer.

use super::CatalogTree;
use serde::{Deserialize, Serialize};

/// Which node of the catalog tree is currently active.
///
/// The core never owns or mutates this state; it only reads the names to
/// test membership. Names are display names, not canonical keys.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "level", rename_all = "lowercase")]
pub enum Selection {
    #[default]
    None,
    Brand {
        brand: String,
    },
    Model {
        brand: String,
        model: String,
    },
    Param {
        brand: String,
        model: String,
        param: String,
    },
}

impl Selection {
    /// Default selection for a freshly built tree: its first brand, or
    /// nothing for an empty tree.
    #[must_use]
    pub fn first_brand(tree: &CatalogTree) -> Self {
        tree.brands.first().map_or(Self::None, |node| Self::Brand {
            brand: node.name.clone(),
        })
    }

    #[must_use]
    pub fn is_brand_selected(&self, brand: &str) -> bool {
        matches!(self, Self::Brand { brand: selected } if selected == brand)
    }

    #[must_use]
    pub fn is_model_selected(&self, brand: &str, model: &str) -> bool {
        matches!(
            self,
            Self::Model { brand: b, model: m } if b == brand && m == model
        )
    }

    #[must_use]
    pub fn is_param_selected(&self, brand: &str, model: &str, param: &str) -> bool {
        matches!(
            self,
            Self::Param { brand: b, model: m, param: p }
                if b == brand && m == model && p == param
        )
    }
}
