//! structural-util - Structural equality and hashing over JSON values.
//!
//! This crate provides the generic comparison layer used by `structural-data`:
//! a recursive value equality that ignores reference identity and field
//! insertion order, and a hash that is consistent with that equality.

pub mod deep_equal;
pub mod deep_hash;
pub mod key_cmp;

// Re-exports for convenience
pub use deep_equal::deep_equal;
pub use deep_hash::{deep_hash, deep_hash64};
pub use key_cmp::key_cmp;
