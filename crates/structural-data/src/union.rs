use crate::case::TaggedCase;
use crate::error::DataError;
use crate::value::{Data, Fields};
use indexmap::IndexMap;

/// A closed set of tagged variants: label → variant-specific payload field
/// names. From the definition it derives per-variant constructors, tag
/// predicates, and exhaustive matchers.
///
/// The payload field names are descriptive: constructors do not validate
/// payloads against them, they document the variant's shape for readers and
/// tooling.
///
/// # Examples
///
/// ```
/// use structural_data::{Fields, TaggedUnion};
///
/// let state = TaggedUnion::new(["Loading", "Success", "Failure"]);
/// let loading = state.constructor("Loading").unwrap().call(Fields::new());
/// assert_eq!(loading.tag(), Some("Loading"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaggedUnion {
    variants: IndexMap<String, Vec<String>>,
}

impl TaggedUnion {
    /// Defines a union from its labels, with no declared payload fields.
    /// Duplicate labels collapse to one.
    pub fn new<S, I>(labels: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        Self {
            variants: labels
                .into_iter()
                .map(|label| (label.into(), Vec::new()))
                .collect(),
        }
    }

    /// Defines a union from `(label, payload field names)` pairs.
    pub fn with_variants<S, F, FI, I>(pairs: I) -> Self
    where
        S: Into<String>,
        F: Into<String>,
        FI: IntoIterator<Item = F>,
        I: IntoIterator<Item = (S, FI)>,
    {
        Self {
            variants: pairs
                .into_iter()
                .map(|(label, fields)| {
                    (label.into(), fields.into_iter().map(Into::into).collect())
                })
                .collect(),
        }
    }

    /// The declared labels, in definition order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.variants.keys().map(String::as_str)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.variants.contains_key(label)
    }

    /// The declared payload field names of a variant.
    pub fn payload_fields(&self, label: &str) -> Option<&[String]> {
        self.variants.get(label).map(Vec::as_slice)
    }

    /// Derives the constructor for one variant.
    pub fn constructor(&self, label: &str) -> Result<TaggedCase, DataError> {
        if !self.contains(label) {
            return Err(DataError::UnknownTag(label.to_string()));
        }
        Ok(TaggedCase::new(label))
    }

    /// Derives a predicate that is true only for instances whose
    /// discriminant equals `label`.
    pub fn is(&self, label: &str) -> Result<TagPredicate, DataError> {
        if !self.contains(label) {
            return Err(DataError::UnknownTag(label.to_string()));
        }
        Ok(TagPredicate {
            tag: label.to_string(),
        })
    }

    /// Starts building an exhaustive matcher over this union. The builder
    /// validates at [`MatcherBuilder::build`] that every declared label has
    /// exactly one handler.
    pub fn matcher<T>(&self) -> MatcherBuilder<'_, T> {
        MatcherBuilder {
            union: self,
            handlers: IndexMap::new(),
            unknown: None,
            duplicate: None,
        }
    }
}

/// A tag predicate derived from a union, the `$is` operation.
#[derive(Debug, Clone, PartialEq)]
pub struct TagPredicate {
    tag: String,
}

impl TagPredicate {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn test(&self, value: &Data) -> bool {
        value.tag() == Some(self.tag.as_str())
    }
}

type Handler<T> = Box<dyn Fn(&Fields) -> T>;

/// Builder for an exhaustive [`Matcher`]. Handler-set errors are recorded as
/// handlers are registered and surfaced by [`MatcherBuilder::build`], so a
/// malformed matcher never constructs.
pub struct MatcherBuilder<'a, T> {
    union: &'a TaggedUnion,
    handlers: IndexMap<String, Handler<T>>,
    unknown: Option<String>,
    duplicate: Option<String>,
}

impl<'a, T> MatcherBuilder<'a, T> {
    /// Registers the handler for one label. The handler receives the
    /// instance's payload fields, discriminant removed.
    pub fn on<F>(mut self, label: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&Fields) -> T + 'static,
    {
        let label = label.into();
        if !self.union.contains(&label) {
            self.unknown.get_or_insert(label);
        } else if self.handlers.contains_key(&label) {
            self.duplicate.get_or_insert(label);
        } else {
            self.handlers.insert(label, Box::new(handler));
        }
        self
    }

    /// Validates the handler set and constructs the matcher.
    ///
    /// Fails with [`DataError::UnknownTag`] for a handler outside the union,
    /// [`DataError::DuplicateHandler`] for a label registered twice, and
    /// [`DataError::IncompleteMatch`] listing every declared label left
    /// without a handler.
    pub fn build(self) -> Result<Matcher<T>, DataError> {
        if let Some(label) = self.unknown {
            return Err(DataError::UnknownTag(label));
        }
        if let Some(label) = self.duplicate {
            return Err(DataError::DuplicateHandler(label));
        }
        let missing: Vec<String> = self
            .union
            .tags()
            .filter(|tag| !self.handlers.contains_key(*tag))
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(DataError::IncompleteMatch { missing });
        }
        Ok(Matcher {
            handlers: self.handlers,
        })
    }
}

/// An exhaustive dispatcher over a tagged union: one handler per declared
/// label, validated when the matcher was built.
pub struct Matcher<T> {
    handlers: IndexMap<String, Handler<T>>,
}

impl<T> core::fmt::Debug for Matcher<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Matcher")
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<T> Matcher<T> {
    /// Applies the handler matching the value's discriminant to its payload
    /// fields. Works on records and on plain JSON objects carrying a `_tag`.
    pub fn dispatch(&self, value: &Data) -> Result<T, DataError> {
        let tag = value.tag().ok_or(DataError::MissingTag)?;
        let handler = self
            .handlers
            .get(tag)
            .ok_or_else(|| DataError::UnknownTag(tag.to_string()))?;
        let payload = value.payload().unwrap_or_default();
        Ok(handler(&payload))
    }
}
