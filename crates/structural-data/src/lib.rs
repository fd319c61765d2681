//! Structural values with tagged variants.
//!
//! # Overview
//!
//! This crate builds immutable, structurally comparable values out of plain
//! JSON payloads: records, tuples, and arrays whose equality and hash are
//! recursive functions of their contents, never of reference identity. On
//! top of the value model it derives tagged constructors, closed tagged
//! unions with exhaustive matchers, and structural error values.
//!
//! # Example
//!
//! ```
//! use structural_data::{tagged, TaggedUnion};
//!
//! let person = tagged("Person");
//! let a = person.call([("name", "Mike")]);
//! let b = person.call([("name", "Mike")]);
//! assert_eq!(a, b);
//! assert_eq!(a.tag(), Some("Person"));
//!
//! let state = TaggedUnion::new(["Loading", "Done"]);
//! let describe = state
//!     .matcher::<String>()
//!     .on("Loading", |_| "still waiting".to_string())
//!     .on("Done", |payload| format!("{} fields", payload.len()))
//!     .build()
//!     .unwrap();
//!
//! let done = state.constructor("Done").unwrap().call([("value", 42i64)]);
//! assert_eq!(describe.dispatch(&done).unwrap(), "1 fields");
//! ```

pub mod case;
pub mod error;
pub mod failure;
pub mod union;
pub mod value;

// Re-export the core public API
pub use case::{case, tagged, CaseConstructor, TaggedCase, TAG_FIELD};
pub use error::DataError;
pub use failure::{error_case, tagged_error, CaseError, TaggedErrorCase};
pub use union::{Matcher, MatcherBuilder, TagPredicate, TaggedUnion};
pub use value::{structural_hash, Data, Fields};
