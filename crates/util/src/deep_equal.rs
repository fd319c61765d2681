use serde_json::Value;

/// Recursive structural equality over JSON values.
///
/// Two values are equal iff they are of the same JSON kind and their contents
/// are recursively equal: scalars by value, arrays element by element
/// (length-sensitive), objects by key set regardless of insertion order.
/// Reference identity never participates.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use structural_util::deep_equal;
///
/// assert!(deep_equal(&json!({"a": 1, "b": 2}), &json!({"b": 2, "a": 1})));
/// assert!(!deep_equal(&json!([1, 2]), &json!([1, 2, 3])));
/// assert!(!deep_equal(&json!(0), &json!(false)));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| deep_equal(x, y)))
        }
        // Different JSON kinds are never equal.
        _ => false,
    }
}
