//! Property-based tests for canonicalization, normalization and diffing.
//!
//! Ensures the core operations stay total over arbitrary loosely-typed
//! input, and that key invariants hold across random inputs.

use catalog_tools::{
    build_tree, canonical_key, collate, extract_params, format_value, normalize_record,
    CanonicalParam, CatalogTree, CollationKey, DiffEngine, NormalizedRecord, RawValue,
};
use proptest::prelude::*;

fn arb_raw_value() -> impl Strategy<Value = RawValue> {
    let leaf = prop_oneof![
        Just(RawValue::Null),
        any::<bool>().prop_map(RawValue::Bool),
        any::<f64>().prop_map(RawValue::Number),
        "\\PC{0,20}".prop_map(RawValue::String),
    ];
    leaf.prop_recursive(3, 24, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(RawValue::Sequence),
            prop::collection::vec(("\\PC{0,12}", inner), 0..6)
                .prop_map(|entries| RawValue::Mapping(entries.into_iter().collect())),
        ]
    })
}

fn arb_records() -> impl Strategy<Value = Vec<NormalizedRecord>> {
    prop::collection::vec(
        ("[A-C]", "[x-z]", prop::collection::vec("[ -~]{0,12}", 0..5)),
        1..8,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (brand, model, params))| NormalizedRecord {
                id: format!("r-{i}"),
                brand,
                model,
                params: params
                    .into_iter()
                    .enumerate()
                    .map(|(j, name)| CanonicalParam::new(format!("p-{j}"), name))
                    .collect(),
            })
            .collect()
    })
}

fn all_param_ids(tree: &CatalogTree) -> Vec<String> {
    let mut ids: Vec<String> = tree
        .brands
        .iter()
        .flat_map(|brand| &brand.models)
        .flat_map(|model| &model.params)
        .map(|param| param.id.clone())
        .collect();
    ids.sort();
    ids
}

proptest! {
    // 500 cases: the tree and diff properties allocate on every case, the
    // text properties are cheap either way.
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn canonical_key_is_idempotent(s in "\\PC{0,60}") {
        let once = canonical_key(&s);
        prop_assert_eq!(canonical_key(&once), once.clone(), "key of {:?} not a fixpoint", s);
    }

    #[test]
    fn canonical_key_folds_case(s in "[A-Za-zА-Яа-я0-9 ]{0,40}") {
        prop_assert_eq!(canonical_key(&s.to_lowercase()), canonical_key(&s));
        prop_assert_eq!(canonical_key(&s.to_uppercase()), canonical_key(&s));
    }

    #[test]
    fn canonical_key_stays_in_its_alphabet(s in "\\PC{0,60}") {
        let key = canonical_key(&s);
        for c in key.chars() {
            prop_assert!(
                c.is_ascii_lowercase()
                    || c.is_ascii_digit()
                    || c == '-'
                    || ('\u{0400}'..='\u{04FF}').contains(&c),
                "unexpected char {:?} in key {:?}",
                c,
                key
            );
        }
    }

    #[test]
    fn extract_params_length_follows_input_shape(v in arb_raw_value()) {
        let params = extract_params(Some(&v));
        match &v {
            RawValue::Sequence(items) => prop_assert_eq!(params.len(), items.len()),
            RawValue::Mapping(entries) => prop_assert_eq!(params.len(), entries.len()),
            RawValue::String(_) => prop_assert!(params.len() <= 1),
            _ => prop_assert!(params.is_empty()),
        }
    }

    #[test]
    fn normalize_record_always_fills_brand_and_model(v in arb_raw_value()) {
        let record = normalize_record(&v, 0);
        prop_assert!(!record.brand.is_empty());
        prop_assert!(!record.model.is_empty());
    }

    #[test]
    fn tree_identity_is_stable_under_input_order(
        (records, shuffled) in arb_records().prop_flat_map(|records| {
            let shuffled = Just(records.clone()).prop_shuffle();
            (Just(records), shuffled)
        })
    ) {
        let forward = build_tree(&records);
        let reordered = build_tree(&shuffled);

        let brand_names = |tree: &CatalogTree| -> Vec<String> {
            tree.brands.iter().map(|b| b.name.clone()).collect()
        };
        prop_assert_eq!(brand_names(&forward), brand_names(&reordered));
        prop_assert_eq!(all_param_ids(&forward), all_param_ids(&reordered));
    }

    #[test]
    fn diff_is_reflexive(v in arb_raw_value()) {
        let engine = DiffEngine::new();
        prop_assert!(engine.diff(&v, &v).is_empty());
    }

    #[test]
    fn diff_sides_swap_cleanly(a in arb_raw_value(), b in arb_raw_value()) {
        let engine = DiffEngine::new();
        let forward = engine.diff(&a, &b);
        let backward = engine.diff(&b, &a);

        let mut forward_keys: Vec<&str> = forward.iter().map(|e| e.key.as_str()).collect();
        let mut backward_keys: Vec<&str> = backward.iter().map(|e| e.key.as_str()).collect();
        forward_keys.sort_unstable();
        backward_keys.sort_unstable();
        prop_assert_eq!(forward_keys, backward_keys);

        for entry in &forward {
            let twin = backward
                .iter()
                .find(|e| e.key == entry.key)
                .expect("key present in both directions");
            prop_assert_eq!(
                format_value(entry.a.as_ref()),
                format_value(twin.b.as_ref())
            );
            prop_assert_eq!(
                format_value(entry.b.as_ref()),
                format_value(twin.a.as_ref())
            );
        }
    }

    #[test]
    fn collation_agrees_with_key_ordering(a in "\\PC{0,30}", b in "\\PC{0,30}") {
        prop_assert_eq!(collate(&a, &b), CollationKey::new(&a).cmp(&CollationKey::new(&b)));
        prop_assert_eq!(collate(&a, &b), collate(&b, &a).reverse());
    }
}
