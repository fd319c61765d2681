use crate::case::TaggedCase;
use crate::value::{collect_fields, Data, Fields};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A structural error value.
///
/// Same structural semantics as [`case`](crate::case())/[`tagged`](crate::tagged)
/// output, but the value additionally satisfies the ambient error-reporting
/// convention: it renders a displayable message, exposes a nested cause
/// through [`std::error::Error::source`], and is recognizable as a typed
/// failure by its discriminant. The value itself is data; constructing one
/// performs no control flow.
#[derive(Debug, Clone)]
pub struct CaseError {
    data: Data,
    cause: Option<Arc<CaseError>>,
}

impl CaseError {
    /// Wraps named fields as a structural error with no discriminant.
    pub fn new<K, V, I>(fields: I) -> Self
    where
        K: Into<String>,
        V: Into<Data>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            data: Data::Struct(collect_fields(fields)),
            cause: None,
        }
    }

    pub(crate) fn from_data(data: Data) -> Self {
        Self { data, cause: None }
    }

    /// The underlying structural value.
    pub fn data(&self) -> &Data {
        &self.data
    }

    /// The discriminant, when the error was built by a tagged constructor.
    pub fn tag(&self) -> Option<&str> {
        self.data.tag()
    }

    /// True only when the discriminant equals `label`. This is the hook the
    /// surrounding failure-propagation machinery keys typed catches on.
    pub fn is_tagged(&self, label: &str) -> bool {
        self.tag() == Some(label)
    }

    /// The `message` string field, when present.
    pub fn message(&self) -> Option<&str> {
        self.data.get("message").and_then(Data::as_str)
    }

    /// The error fields, discriminant excluded.
    pub fn payload(&self) -> Fields {
        self.data.payload().unwrap_or_default()
    }

    /// Chains a nested cause, exposed through [`std::error::Error::source`].
    pub fn with_cause(mut self, cause: CaseError) -> Self {
        self.cause = Some(Arc::new(cause));
        self
    }

    pub fn cause(&self) -> Option<&CaseError> {
        self.cause.as_deref()
    }
}

impl PartialEq for CaseError {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data && self.cause == other.cause
    }
}

impl Hash for CaseError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
        match &self.cause {
            Some(cause) => {
                1u8.hash(state);
                cause.hash(state);
            }
            None => 0u8.hash(state),
        }
    }
}

impl fmt::Display for CaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.tag(), self.message()) {
            (Some(tag), Some(message)) => write!(f, "{tag}: {message}"),
            (Some(tag), None) => write!(f, "{tag}"),
            (None, Some(message)) => write!(f, "{message}"),
            (None, None) => write!(f, "{}", self.data),
        }
    }
}

impl std::error::Error for CaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

/// Wraps named fields as a structural error, the error-flavored counterpart
/// of [`case`](crate::case()).
///
/// # Examples
///
/// ```
/// use structural_data::error_case;
///
/// let err = error_case([("message", "boom")]);
/// assert_eq!(err.to_string(), "boom");
/// ```
pub fn error_case<K, V, I>(fields: I) -> CaseError
where
    K: Into<String>,
    V: Into<Data>,
    I: IntoIterator<Item = (K, V)>,
{
    CaseError::new(fields)
}

/// A reusable constructor of tagged structural errors, the error-flavored
/// counterpart of [`tagged`](crate::tagged).
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedErrorCase {
    inner: TaggedCase,
}

impl TaggedErrorCase {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            inner: TaggedCase::new(label),
        }
    }

    pub fn tag(&self) -> &str {
        self.inner.tag()
    }

    pub fn call<K, V, I>(&self, fields: I) -> CaseError
    where
        K: Into<String>,
        V: Into<Data>,
        I: IntoIterator<Item = (K, V)>,
    {
        CaseError::from_data(self.inner.call(fields))
    }
}

/// Returns a constructor of structural errors carrying the fixed
/// discriminant `label`.
///
/// # Examples
///
/// ```
/// use structural_data::tagged_error;
///
/// let not_found = tagged_error("NotFound");
/// let err = not_found.call([("message", "no such user")]);
/// assert!(err.is_tagged("NotFound"));
/// assert_eq!(err.to_string(), "NotFound: no such user");
/// ```
pub fn tagged_error(label: impl Into<String>) -> TaggedErrorCase {
    TaggedErrorCase::new(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::structural_hash;
    use std::error::Error;

    #[test]
    fn test_structural_equality_of_errors() {
        let a = error_case([("message", "boom"), ("code", "500")]);
        let b = error_case([("code", "500"), ("message", "boom")]);
        assert_eq!(a, b);

        let mut ha = std::collections::hash_map::DefaultHasher::new();
        let mut hb = std::collections::hash_map::DefaultHasher::new();
        a.hash(&mut ha);
        b.hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());
    }

    #[test]
    fn test_tagged_error_keys_typed_catches() {
        let timeout = tagged_error("Timeout");
        let err = timeout.call([("seconds", 30i64)]);
        assert_eq!(err.tag(), Some("Timeout"));
        assert!(err.is_tagged("Timeout"));
        assert!(!err.is_tagged("NotFound"));
    }

    #[test]
    fn test_display_prefers_tag_and_message() {
        assert_eq!(
            tagged_error("NotFound")
                .call([("message", "no such user")])
                .to_string(),
            "NotFound: no such user"
        );
        assert_eq!(
            tagged_error("NotFound").call(Fields::new()).to_string(),
            "NotFound"
        );
        assert_eq!(error_case([("message", "boom")]).to_string(), "boom");
        assert_eq!(
            error_case([("code", 1i64)]).to_string(),
            r#"{"code":1}"#
        );
    }

    #[test]
    fn test_cause_chain_through_source() {
        let root = tagged_error("Io").call([("message", "disk gone")]);
        let err = tagged_error("LoadFailed")
            .call([("message", "could not load profile")])
            .with_cause(root.clone());

        assert_eq!(err.cause(), Some(&root));
        let source = err.source().map(ToString::to_string);
        assert_eq!(source, Some("Io: disk gone".to_string()));
        assert!(root.source().is_none());
    }

    #[test]
    fn test_cause_participates_in_equality() {
        let root = tagged_error("Io").call(Fields::new());
        let a = error_case([("message", "x")]).with_cause(root.clone());
        let b = error_case([("message", "x")]).with_cause(root);
        let c = error_case([("message", "x")]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_error_data_is_plain_structural_value() {
        let err = tagged_error("NotFound").call([("id", 7i64)]);
        let same = crate::case::tagged("NotFound").call([("id", 7i64)]);
        assert_eq!(err.data(), &same);
        assert_eq!(structural_hash(err.data()), structural_hash(&same));
        assert_eq!(err.payload().len(), 1);
    }
}
