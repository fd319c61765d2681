//! Property tests for the equality/hash contract: `deep_equal` must be
//! reflexive and insertion-order-insensitive, and equal values must produce
//! identical digests.

use proptest::prelude::*;
use serde_json::{Map, Value};
use structural_util::{deep_equal, deep_hash64};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-z]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Rebuilds every object in the tree with reversed key insertion order.
fn reverse_key_order(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(reverse_key_order).collect()),
        Value::Object(fields) => {
            let mut reversed = Map::new();
            for (key, field) in fields.iter().rev() {
                reversed.insert(key.clone(), reverse_key_order(field));
            }
            Value::Object(reversed)
        }
        other => other.clone(),
    }
}

proptest! {
    #[test]
    fn equality_is_reflexive(v in arb_json()) {
        prop_assert!(deep_equal(&v, &v));
    }

    #[test]
    fn clones_are_equal_with_equal_digests(v in arb_json()) {
        let w = v.clone();
        prop_assert!(deep_equal(&v, &w));
        prop_assert_eq!(deep_hash64(&v), deep_hash64(&w));
    }

    #[test]
    fn key_insertion_order_is_unobservable(v in arb_json()) {
        let w = reverse_key_order(&v);
        prop_assert!(deep_equal(&v, &w));
        prop_assert_eq!(deep_hash64(&v), deep_hash64(&w));
    }

    #[test]
    fn unequal_scalars_stay_unequal(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(a != b);
        let va = Value::Number(a.into());
        let vb = Value::Number(b.into());
        prop_assert!(!deep_equal(&va, &vb));
    }
}
