//! Error types for tag tree operations.
//!
//! This module contains the [`Error`] type which represents all possible
//! errors that can occur when reading or mutating a tag tree. Every failure
//! is reported at the point of violation and leaves the tree unchanged.
//!
//! # Example
//!
//! ```
//! use nbt_tree::{Error, ListTag, TagID, Value};
//!
//! let list = ListTag::new();
//! list.push(Value::from("poison")).unwrap();
//!
//! // The list is now locked to String elements.
//! let err = list.push(Value::from(1i32)).unwrap_err();
//! assert_eq!(
//!     err,
//!     Error::KindMismatch {
//!         expected: TagID::String,
//!         actual: TagID::Int,
//!     }
//! );
//! ```

use thiserror::Error;

use crate::TagID;

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all possible errors that can occur when accessing
/// or mutating a tag tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A value of the wrong kind was accessed or inserted.
    ///
    /// Returned when a checked [`Value`](crate::Value) accessor is called
    /// on a different discriminant, or when a list append/overwrite
    /// violates the list's declared element kind.
    #[error("tag kind mismatch: expected {expected:?}, got {actual:?}")]
    KindMismatch { expected: TagID, actual: TagID },

    /// An array or list index was out of range.
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },

    /// A compound lookup or removal named a key that is not present.
    #[error("key not found: {0:?}")]
    KeyNotFound(String),

    /// An attempt was made to store [`Value::End`](crate::Value::End) in a
    /// list or compound.
    ///
    /// `End` marks the absence of a value and exists only transiently
    /// during construction; a well-formed tree never holds it as a
    /// committed child.
    #[error("an End value cannot be stored in a list or compound")]
    EndValue,
}
