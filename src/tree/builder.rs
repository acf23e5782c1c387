//! Catalog tree assembly from normalized records.

use indexmap::IndexMap;

use crate::model::{BrandNode, CanonicalParam, CatalogTree, ModelNode, NormalizedRecord};
use crate::normalize::{FALLBACK_BRAND, FALLBACK_MODEL};
use crate::text::{canonical_key, CollationKey};

/// Joiner between the canonicalized segments of a stable parameter id.
const STABLE_ID_JOINER: &str = "__";

/// Group records into the brand → model → parameter hierarchy.
///
/// Records group by their exact `brand` and `model` strings (an empty string
/// degrades to the placeholder, matching upstream normalization). Within a
/// model, parameters deduplicate by canonical key: the first-seen spelling of
/// a name wins and later case or diacritic variants are dropped. Blank names
/// never enter the tree.
///
/// Every surviving parameter gets a stable id built from the canonical keys
/// of its brand, model and name, so the same triple yields the same id across
/// rebuilds regardless of input order.
///
/// Brands and the models inside each brand come out collation-sorted;
/// parameters keep first-seen order.
#[must_use]
pub fn build_tree(records: &[NormalizedRecord]) -> CatalogTree {
    // brand name -> model name -> canonical param key -> param
    let mut groups: IndexMap<&str, IndexMap<&str, IndexMap<String, CanonicalParam>>> =
        IndexMap::new();
    let mut duplicates = 0usize;

    for record in records {
        let brand = non_empty_or(&record.brand, FALLBACK_BRAND);
        let model = non_empty_or(&record.model, FALLBACK_MODEL);
        let brand_key = canonical_key(brand);
        let model_key = canonical_key(model);

        let params = groups.entry(brand).or_default().entry(model).or_default();

        for param in &record.params {
            let name = param.name.trim();
            if name.is_empty() {
                continue;
            }
            let name_key = canonical_key(name);
            if params.contains_key(&name_key) {
                duplicates += 1;
                continue;
            }
            let id =
                format!("{brand_key}{STABLE_ID_JOINER}{model_key}{STABLE_ID_JOINER}{name_key}");
            params.insert(name_key, CanonicalParam::new(id, name));
        }
    }

    let mut brands: Vec<BrandNode> = groups
        .into_iter()
        .map(|(brand, models)| {
            let mut models: Vec<ModelNode> = models
                .into_iter()
                .map(|(model, params)| ModelNode {
                    name: model.to_string(),
                    params: params.into_values().collect(),
                })
                .collect();
            models.sort_by_cached_key(|node| CollationKey::new(&node.name));
            BrandNode {
                name: brand.to_string(),
                models,
            }
        })
        .collect();
    brands.sort_by_cached_key(|node| CollationKey::new(&node.name));

    let tree = CatalogTree { brands };
    tracing::debug!(
        brands = tree.len(),
        params = tree.param_count(),
        duplicates,
        "built catalog tree"
    );
    tree
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}
