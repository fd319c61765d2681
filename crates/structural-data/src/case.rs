use crate::value::{collect_fields, Data, Fields};

/// The reserved discriminant field name.
pub const TAG_FIELD: &str = "_tag";

/// A reusable constructor of plain structural records.
///
/// Each invocation wraps the given fields as a new [`Data::Struct`]; no
/// implicit fields are added. Instances from the same or different
/// constructors compare structurally.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseConstructor;

impl CaseConstructor {
    pub fn call<K, V, I>(&self, fields: I) -> Data
    where
        K: Into<String>,
        V: Into<Data>,
        I: IntoIterator<Item = (K, V)>,
    {
        Data::Struct(collect_fields(fields))
    }
}

/// Returns a constructor of plain structural records.
///
/// # Examples
///
/// ```
/// use structural_data::case;
///
/// let point = case();
/// let a = point.call([("x", 1i64), ("y", 2i64)]);
/// let b = point.call([("y", 2i64), ("x", 1i64)]);
/// assert_eq!(a, b);
/// ```
pub fn case() -> CaseConstructor {
    CaseConstructor
}

/// A reusable constructor that injects a fixed discriminant into every
/// produced record. The caller never passes the discriminant; a
/// caller-supplied `_tag` field is overwritten by the fixed label.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedCase {
    tag: String,
}

impl TaggedCase {
    pub fn new(label: impl Into<String>) -> Self {
        Self { tag: label.into() }
    }

    /// The fixed discriminant this constructor injects.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn call<K, V, I>(&self, fields: I) -> Data
    where
        K: Into<String>,
        V: Into<Data>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut out = Fields::new();
        out.insert(TAG_FIELD.to_string(), Data::from(self.tag.as_str()));
        for (key, value) in fields {
            let key = key.into();
            if key == TAG_FIELD {
                continue;
            }
            out.insert(key, value.into());
        }
        Data::Struct(out)
    }
}

/// Returns a constructor that stamps the discriminant `label` into every
/// produced record.
///
/// # Examples
///
/// ```
/// use structural_data::tagged;
///
/// let person = tagged("Person");
/// let mike = person.call([("name", "Mike")]);
/// assert_eq!(mike.tag(), Some("Person"));
/// ```
pub fn tagged(label: impl Into<String>) -> TaggedCase {
    TaggedCase::new(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::structural_hash;

    #[test]
    fn test_case_adds_no_implicit_fields() {
        let make = case();
        let value = make.call([("name", "Mike")]);
        assert_eq!(value.len(), 1);
        assert_eq!(value.tag(), None);
    }

    #[test]
    fn test_case_instances_compare_structurally() {
        let make = case();
        let a = make.call([("n", 1i64)]);
        let b = case().call([("n", 1i64)]);
        assert_eq!(a, b);
        assert_eq!(structural_hash(&a), structural_hash(&b));
    }

    #[test]
    fn test_tagged_injects_discriminant() {
        let person = tagged("Person");
        let value = person.call([("name", "Mike")]);
        assert_eq!(value.tag(), Some("Person"));
        assert_eq!(value.get("name").and_then(Data::as_str), Some("Mike"));
        assert_eq!(value.len(), 2);
    }

    #[test]
    fn test_tagged_with_empty_payload() {
        let loading = tagged("Loading");
        let value = loading.call(Fields::new());
        assert_eq!(value.tag(), Some("Loading"));
        assert_eq!(value.len(), 1);
    }

    #[test]
    fn test_caller_supplied_tag_is_overwritten() {
        let person = tagged("Person");
        let value = person.call([(TAG_FIELD, "Impostor"), ("name", "Mike")]);
        assert_eq!(value.tag(), Some("Person"));
    }

    #[test]
    fn test_different_tags_never_equal() {
        let a = tagged("A").call([("n", 1i64)]);
        let b = tagged("B").call([("n", 1i64)]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_same_tag_same_payload_equal() {
        let a = tagged("A").call([("n", 1i64), ("m", 2i64)]);
        let b = tagged("A").call([("m", 2i64), ("n", 1i64)]);
        assert_eq!(a, b);
        assert_eq!(structural_hash(&a), structural_hash(&b));
    }
}
