//! Normalized catalog records - the canonical intermediate representation.

use serde::{Deserialize, Serialize};

/// One normalized parameter of a catalog record.
///
/// `id` is stable across re-derivation from the same raw input and unique
/// within the scope it was generated for (a record or a model node).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalParam {
    pub id: String,
    pub name: String,
}

impl CanonicalParam {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A catalog record reduced to the fixed shape every consumer works with,
/// regardless of how the raw entry was structured.
///
/// `brand` and `model` hold sentinel placeholders when the raw record did not
/// carry usable values; they are never empty. `params` may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub params: Vec<CanonicalParam>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_serde_shape() {
        let param = CanonicalParam::new("param-0", "Thickness 12.5 mm");
        let json = serde_json::to_string(&param).unwrap();
        assert_eq!(json, r#"{"id":"param-0","name":"Thickness 12.5 mm"}"#);

        let back: CanonicalParam = serde_json::from_str(&json).unwrap();
        assert_eq!(back, param);
    }
}
