#![cfg(feature = "value")]
//! Property-based tests for structural copy and merge.
//!
//! ## Copy Laws
//! - **Fidelity**: `clone(v) == v` for every data value
//! - **Merge identity**: `merge(base, empty_map) == clone(base)`
//! - **Merge override**: every override key ends up in the result with
//!   exactly the override's value
//! - **Non-mutation**: `merge` leaves both inputs untouched
//!
//! Using proptest, random value trees several levels deep exercise these
//! laws across shapes a hand-written table would miss.

use combinars::value::{Value, merge};
use proptest::collection::{btree_map, vec};
use proptest::prelude::*;

/// Generates arbitrary data values (no function leaves: functions compare
/// by identity, which would make structural fidelity vacuous).
fn data_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        // Finite floats only: NaN breaks reflexivity by design.
        (-1.0e9_f64..1.0e9).prop_map(Value::Float),
        "[a-z]{0,8}".prop_map(Value::from),
    ];

    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            vec(inner.clone(), 0..4).prop_map(Value::Seq),
            btree_map("[a-z]{1,4}", inner, 0..4).prop_map(Value::Map),
        ]
    })
}

fn data_map() -> impl Strategy<Value = Value> {
    btree_map("[a-z]{1,4}", data_value(), 0..5).prop_map(Value::Map)
}

proptest! {
    /// Fidelity: a structural copy is equal to its source.
    #[test]
    fn prop_clone_equals_source(value in data_value()) {
        prop_assert_eq!(value.clone(), value);
    }

    /// Merge identity: merging an empty override map is a plain copy.
    #[test]
    fn prop_merge_empty_is_clone(base in data_map()) {
        let merged = merge(&base, &Value::Map(std::collections::BTreeMap::new()));
        prop_assert_eq!(merged, base);
    }

    /// Merge override: the result carries every override entry verbatim,
    /// and every base key missing from the overrides survives.
    #[test]
    fn prop_merge_applies_all_overrides(base in data_map(), overrides in data_map()) {
        let merged = merge(&base, &overrides);

        let override_entries = overrides.as_map().unwrap();
        for (key, value) in override_entries {
            prop_assert_eq!(merged.get(key), Some(value));
        }

        for (key, value) in base.as_map().unwrap() {
            if !override_entries.contains_key(key) {
                prop_assert_eq!(merged.get(key), Some(value));
            }
        }
    }

    /// Non-mutation: merge builds a new mapping, inputs stay as they were.
    #[test]
    fn prop_merge_leaves_inputs_untouched(base in data_map(), overrides in data_map()) {
        let base_snapshot = base.clone();
        let overrides_snapshot = overrides.clone();

        let _ = merge(&base, &overrides);

        prop_assert_eq!(base, base_snapshot);
        prop_assert_eq!(overrides, overrides_snapshot);
    }
}
