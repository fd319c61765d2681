use std::cmp::Ordering;

/// Compares two object keys for deterministic traversal order.
///
/// Keys are ordered by length first, then lexicographically. Hashing visits
/// object fields in this order so that insertion order is unobservable.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use structural_util::key_cmp;
///
/// assert_eq!(key_cmp("a", "b"), Ordering::Less);
/// assert_eq!(key_cmp("aa", "b"), Ordering::Greater); // "aa" is longer
/// assert_eq!(key_cmp("tag", "tag"), Ordering::Equal);
/// ```
pub fn key_cmp(a: &str, b: &str) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => a.cmp(b),
        other => other,
    }
}
