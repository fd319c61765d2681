use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    /// An exhaustive matcher was built without a handler for every declared
    /// label. Raised at construction time, never at dispatch time.
    #[error("Incomplete match, missing handlers for: {}", missing.join(", "))]
    IncompleteMatch { missing: Vec<String> },

    #[error("Unknown tag: {0}")]
    UnknownTag(String),

    #[error("Duplicate handler for tag: {0}")]
    DuplicateHandler(String),

    #[error("Value carries no discriminant field.")]
    MissingTag,
}
