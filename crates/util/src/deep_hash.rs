use crate::key_cmp::key_cmp;
use serde_json::Value;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

// Per-kind discriminants mixed into the stream so that values of different
// JSON kinds with overlapping payloads cannot collide structurally
// (e.g. `0` vs `false`, `{}` vs `[]`).
const KIND_NULL: u8 = 0;
const KIND_BOOL: u8 = 1;
const KIND_NUMBER: u8 = 2;
const KIND_STRING: u8 = 3;
const KIND_ARRAY: u8 = 4;
const KIND_OBJECT: u8 = 5;

/// Feeds the structural hash of a JSON value into `state`.
///
/// The hash is consistent with [`crate::deep_equal`]: values that compare
/// equal produce identical digests. Object fields are visited in
/// [`key_cmp`](crate::key_cmp) order, so insertion order is unobservable.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use structural_util::deep_hash64;
///
/// let a = json!({"a": 1, "b": 2});
/// let b = json!({"b": 2, "a": 1});
/// assert_eq!(deep_hash64(&a), deep_hash64(&b));
/// ```
pub fn deep_hash<H: Hasher>(value: &Value, state: &mut H) {
    match value {
        Value::Null => KIND_NULL.hash(state),
        Value::Bool(b) => {
            KIND_BOOL.hash(state);
            b.hash(state);
        }
        Value::Number(n) => {
            KIND_NUMBER.hash(state);
            // Follows serde_json::Number equality: a value stored as u64,
            // i64, or f64 is only ever equal to one of the same category.
            if let Some(u) = n.as_u64() {
                0u8.hash(state);
                u.hash(state);
            } else if let Some(i) = n.as_i64() {
                1u8.hash(state);
                i.hash(state);
            } else if let Some(f) = n.as_f64() {
                2u8.hash(state);
                f.to_bits().hash(state);
            }
        }
        Value::String(s) => {
            KIND_STRING.hash(state);
            s.hash(state);
        }
        Value::Array(items) => {
            KIND_ARRAY.hash(state);
            items.len().hash(state);
            for item in items {
                deep_hash(item, state);
            }
        }
        Value::Object(fields) => {
            KIND_OBJECT.hash(state);
            fields.len().hash(state);
            let mut keys: Vec<&str> = fields.keys().map(String::as_str).collect();
            keys.sort_unstable_by(|a, b| key_cmp(a, b));
            for key in keys {
                key.hash(state);
                if let Some(field) = fields.get(key) {
                    deep_hash(field, state);
                }
            }
        }
    }
}

/// Computes the 64-bit structural digest of a JSON value.
pub fn deep_hash64(value: &Value) -> u64 {
    let mut hasher = DefaultHasher::new();
    deep_hash(value, &mut hasher);
    hasher.finish()
}
