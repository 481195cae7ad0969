//! An in-memory data model for NBT (Named Binary Tag) documents.
//!
//! This crate models the tag tree only: the twelve tag kinds, their
//! container semantics, and their shared-ownership rules. Nodes are
//! reference-counted cells, so a child tag can sit under several parents
//! at once and a mutation through one handle is visible through every
//! other. Encoding, decoding, SNBT, and file tooling are collaborators
//! layered on top; this crate performs no I/O.
//!
//! The model is single-threaded: handles are `!Send` and `!Sync`.
//!
//! # Example
//!
//! ```
//! use nbt_tree::{CompoundTag, IntTag, ListTag, Value};
//!
//! let root = CompoundTag::new();
//! root.insert("hp", Value::from(20i32)).unwrap();
//!
//! let tags = ListTag::new();
//! tags.push(Value::from("poison")).unwrap();
//! root.insert("tags", Value::List(tags)).unwrap();
//!
//! assert_eq!(root.get("hp").unwrap().int(), Ok(20));
//! assert_eq!(root.get("tags").unwrap().as_list().unwrap().len(), 1);
//! ```

mod array;
mod compound;
mod error;
mod index;
mod list;
mod scalar;
#[cfg(feature = "serde")]
mod ser;
mod tag;
mod value;

pub use array::*;
pub use compound::*;
pub use error::*;
pub use index::*;
pub use list::*;
pub use scalar::*;
pub use tag::*;
pub use value::*;
