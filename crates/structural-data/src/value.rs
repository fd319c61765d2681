use crate::case::TAG_FIELD;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use structural_util::{deep_equal, deep_hash, key_cmp};

/// Record fields: insertion-ordered, but equality and hash ignore the order.
pub type Fields = IndexMap<String, Data>;

/// An immutable, structurally comparable value.
///
/// Equality is recursive and never depends on allocation identity: two values
/// are equal iff they are of the same kind and their contents are equal.
/// Plain JSON leaves compare with [`deep_equal`]; nested `Data` values
/// compare structurally. The wrapper kind is part of the value, so a
/// [`Data::Tuple`] never equals a plain JSON array — flatten both with
/// [`Data::to_json`] to compare through the purely structural view.
#[derive(Debug, Clone)]
pub enum Data {
    /// A plain JSON leaf.
    Json(Value),
    /// A record of named fields.
    Struct(Fields),
    /// An ordered, length-sensitive sequence.
    Tuple(Vec<Data>),
    /// An ordered sequence; same positional equality as `Tuple`, but a
    /// distinct kind.
    Array(Vec<Data>),
}

pub(crate) fn collect_fields<K, V, I>(pairs: I) -> Fields
where
    K: Into<String>,
    V: Into<Data>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

impl Data {
    /// Wraps named fields as a structurally comparable record.
    ///
    /// # Examples
    ///
    /// ```
    /// use structural_data::Data;
    ///
    /// let a = Data::struct_of([("name", "Mike"), ("role", "admin")]);
    /// let b = Data::struct_of([("role", "admin"), ("name", "Mike")]);
    /// assert_eq!(a, b);
    /// ```
    pub fn struct_of<K, V, I>(fields: I) -> Data
    where
        K: Into<String>,
        V: Into<Data>,
        I: IntoIterator<Item = (K, V)>,
    {
        Data::Struct(collect_fields(fields))
    }

    /// Wraps an ordered sequence as a tuple value.
    pub fn tuple_of<V, I>(items: I) -> Data
    where
        V: Into<Data>,
        I: IntoIterator<Item = V>,
    {
        Data::Tuple(items.into_iter().map(Into::into).collect())
    }

    /// Wraps an ordered sequence as an array value.
    pub fn array_of<V, I>(items: I) -> Data
    where
        V: Into<Data>,
        I: IntoIterator<Item = V>,
    {
        Data::Array(items.into_iter().map(Into::into).collect())
    }

    /// Wraps a plain JSON value as a leaf.
    pub fn json(value: Value) -> Data {
        Data::Json(value)
    }

    /// The kind of this value, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Data::Json(_) => "json",
            Data::Struct(_) => "struct",
            Data::Tuple(_) => "tuple",
            Data::Array(_) => "array",
        }
    }

    /// Looks up a record field by name.
    pub fn get(&self, key: &str) -> Option<&Data> {
        match self {
            Data::Struct(fields) => fields.get(key),
            _ => None,
        }
    }

    /// Looks up a sequence element by position.
    pub fn index(&self, i: usize) -> Option<&Data> {
        match self {
            Data::Tuple(items) | Data::Array(items) => items.get(i),
            _ => None,
        }
    }

    /// Number of fields or elements. JSON leaves report the length of their
    /// own container, or 0 for scalars.
    pub fn len(&self) -> usize {
        match self {
            Data::Struct(fields) => fields.len(),
            Data::Tuple(items) | Data::Array(items) => items.len(),
            Data::Json(Value::Array(items)) => items.len(),
            Data::Json(Value::Object(fields)) => fields.len(),
            Data::Json(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The string content of a JSON string leaf.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Data::Json(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// The record fields, if this value is a record.
    pub fn fields(&self) -> Option<&Fields> {
        match self {
            Data::Struct(fields) => Some(fields),
            _ => None,
        }
    }

    /// The sequence elements, if this value is a tuple or array.
    pub fn items(&self) -> Option<&[Data]> {
        match self {
            Data::Tuple(items) | Data::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The discriminant of a tagged value: the string under the reserved
    /// `_tag` field. Works on records and on plain JSON objects.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Data::Struct(fields) => fields.get(TAG_FIELD).and_then(Data::as_str),
            Data::Json(Value::Object(fields)) => fields.get(TAG_FIELD).and_then(Value::as_str),
            _ => None,
        }
    }

    /// The variant-specific fields of a tagged value: everything except the
    /// discriminant. Works on records and on plain JSON objects.
    pub fn payload(&self) -> Option<Fields> {
        match self {
            Data::Struct(fields) => Some(
                fields
                    .iter()
                    .filter(|(key, _)| key.as_str() != TAG_FIELD)
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect(),
            ),
            Data::Json(Value::Object(fields)) => Some(
                fields
                    .iter()
                    .filter(|(key, _)| key.as_str() != TAG_FIELD)
                    .map(|(key, value)| (key.clone(), Data::Json(value.clone())))
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Recursively flattens wrappers into plain JSON. This is the purely
    /// structural view: a tuple and an array of the same elements flatten to
    /// the same JSON array.
    pub fn to_json(&self) -> Value {
        match self {
            Data::Json(value) => value.clone(),
            Data::Struct(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
            Data::Tuple(items) | Data::Array(items) => {
                Value::Array(items.iter().map(Data::to_json).collect())
            }
        }
    }
}

impl PartialEq for Data {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Data::Json(a), Data::Json(b)) => deep_equal(a, b),
            (Data::Struct(a), Data::Struct(b)) => {
                a.len() == b.len()
                    && a.iter().all(|(key, x)| b.get(key).is_some_and(|y| x == y))
            }
            (Data::Tuple(a), Data::Tuple(b)) | (Data::Array(a), Data::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
            }
            // The wrapper kind is part of the value.
            _ => false,
        }
    }
}

impl Hash for Data {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Data::Json(value) => {
                0u8.hash(state);
                deep_hash(value, state);
            }
            Data::Struct(fields) => {
                1u8.hash(state);
                fields.len().hash(state);
                // Visit fields in key_cmp order so insertion order is
                // unobservable, matching equality.
                let mut keys: Vec<&str> = fields.keys().map(String::as_str).collect();
                keys.sort_unstable_by(|a, b| key_cmp(a, b));
                for key in keys {
                    key.hash(state);
                    if let Some(field) = fields.get(key) {
                        field.hash(state);
                    }
                }
            }
            Data::Tuple(items) => {
                2u8.hash(state);
                items.len().hash(state);
                for item in items {
                    item.hash(state);
                }
            }
            Data::Array(items) => {
                3u8.hash(state);
                items.len().hash(state);
                for item in items {
                    item.hash(state);
                }
            }
        }
    }
}

/// Computes the 64-bit structural digest of a value. Equal values produce
/// identical digests.
pub fn structural_hash(value: &Data) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

impl fmt::Display for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl Serialize for Data {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl From<Value> for Data {
    fn from(v: Value) -> Self {
        Data::Json(v)
    }
}

impl From<bool> for Data {
    fn from(b: bool) -> Self {
        Data::Json(Value::Bool(b))
    }
}

impl From<i64> for Data {
    fn from(n: i64) -> Self {
        Data::Json(Value::Number(serde_json::Number::from(n)))
    }
}

impl From<f64> for Data {
    fn from(n: f64) -> Self {
        Data::Json(serde_json::json!(n))
    }
}

impl From<String> for Data {
    fn from(s: String) -> Self {
        Data::Json(Value::String(s))
    }
}

impl From<&str> for Data {
    fn from(s: &str) -> Self {
        Data::Json(Value::String(s.to_string()))
    }
}
