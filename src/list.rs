//! List tag nodes: ordered sequences homogeneous in their declared kind.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::{Error, Result, TagID, Value};

struct ListInner {
    /// Declared element kind. `None` while the list has never held an
    /// element and was not constructed with an explicit kind.
    kind: Option<TagID>,
    items: Vec<Value>,
}

/// A list tag node.
///
/// A list is ordered and homogeneous in its declared element kind. A list
/// constructed with [`new`](ListTag::new) starts untyped; the first
/// successful [`push`](ListTag::push) locks the declared kind to that
/// element's kind. Once declared, the kind persists even if the list is
/// emptied again. Appending or overwriting with a mismatched kind fails
/// with [`Error::KindMismatch`] and leaves the list unchanged.
///
/// Cloning the handle aliases the node; [`deep_clone`](ListTag::deep_clone)
/// recursively copies the elements.
///
/// # Example
///
/// ```
/// use nbt_tree::{ListTag, TagID, Value};
///
/// let list = ListTag::new();
/// assert_eq!(list.kind(), None);
///
/// list.push(Value::from("poison")).unwrap();
/// assert_eq!(list.kind(), Some(TagID::String));
///
/// assert!(list.push(Value::from(1i32)).is_err());
/// assert_eq!(list.len(), 1);
/// ```
pub struct ListTag(Rc<RefCell<ListInner>>);

impl ListTag {
    /// Creates an untyped empty list.
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(ListInner {
            kind: None,
            items: Vec::new(),
        })))
    }

    /// Creates an empty list with `kind` already declared.
    ///
    /// The kind is reserved even while the list is empty, so the first
    /// push must already match it. `TagID::End` is not a storable element
    /// kind; `of_kind(TagID::End)` is equivalent to [`new`](ListTag::new).
    pub fn of_kind(kind: TagID) -> Self {
        Self(Rc::new(RefCell::new(ListInner {
            kind: (kind != TagID::End).then_some(kind),
            items: Vec::new(),
        })))
    }

    /// The declared element kind, or `None` if the list is still untyped.
    pub fn kind(&self) -> Option<TagID> {
        self.0.borrow().kind
    }

    pub fn len(&self) -> usize {
        self.0.borrow().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().items.is_empty()
    }

    /// Checks `value` against the declared kind without committing it.
    fn check_kind(declared: Option<TagID>, value: &Value) -> Result<TagID> {
        let kind = value.kind();
        if kind == TagID::End {
            return Err(Error::EndValue);
        }
        match declared {
            Some(expected) if expected != kind => {
                Err(Error::KindMismatch { expected, actual: kind })
            }
            _ => Ok(kind),
        }
    }

    /// Appends `value`, declaring the element kind if the list is untyped.
    pub fn push(&self, value: Value) -> Result<()> {
        let mut inner = self.0.borrow_mut();
        let kind = Self::check_kind(inner.kind, &value)?;
        inner.kind = Some(kind);
        inner.items.push(value);
        Ok(())
    }

    /// Inserts `value` at `index`, shifting later elements right.
    ///
    /// `index` may equal `len()`, which appends. Kind rules are the same
    /// as for [`push`](ListTag::push).
    pub fn insert(&self, index: usize, value: Value) -> Result<()> {
        let mut inner = self.0.borrow_mut();
        let len = inner.items.len();
        if index > len {
            return Err(Error::OutOfBounds { index, len });
        }
        let kind = Self::check_kind(inner.kind, &value)?;
        inner.kind = Some(kind);
        inner.items.insert(index, value);
        Ok(())
    }

    /// Returns an aliasing handle to the element at `index`.
    pub fn get(&self, index: usize) -> Result<Value> {
        let inner = self.0.borrow();
        inner.items.get(index).cloned().ok_or(Error::OutOfBounds {
            index,
            len: inner.items.len(),
        })
    }

    /// Overwrites the element at `index` and returns the previous element.
    ///
    /// The new value must match the declared kind.
    pub fn set(&self, index: usize, value: Value) -> Result<Value> {
        let mut inner = self.0.borrow_mut();
        let len = inner.items.len();
        if index >= len {
            return Err(Error::OutOfBounds { index, len });
        }
        Self::check_kind(inner.kind, &value)?;
        Ok(std::mem::replace(&mut inner.items[index], value))
    }

    /// Removes and returns the element at `index`.
    ///
    /// Removing the last element leaves the declared kind in place; the
    /// list does not revert to untyped.
    pub fn remove(&self, index: usize) -> Result<Value> {
        let mut inner = self.0.borrow_mut();
        let len = inner.items.len();
        if index >= len {
            return Err(Error::OutOfBounds { index, len });
        }
        Ok(inner.items.remove(index))
    }

    /// Removes every element. The declared kind is retained.
    pub fn clear(&self) {
        self.0.borrow_mut().items.clear();
    }

    /// Iterates over aliasing handles to the elements.
    pub fn iter(&self) -> impl Iterator<Item = Value> {
        self.0.borrow().items.clone().into_iter()
    }

    /// Returns `true` if `self` and `other` are aliases of the same node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Creates an independent list with the same declared kind and a deep
    /// copy of every element.
    ///
    /// Does not terminate if the tree under this list contains a reference
    /// cycle.
    pub fn deep_clone(&self) -> Self {
        let inner = self.0.borrow();
        Self(Rc::new(RefCell::new(ListInner {
            kind: inner.kind,
            items: inner.items.iter().map(Value::deep_clone).collect(),
        })))
    }
}

impl Default for ListTag {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloning a handle aliases the node rather than copying the elements.
impl Clone for ListTag {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

/// Two lists are equal iff they have the same declared kind, the same
/// length, and pointwise-equal elements.
impl PartialEq for ListTag {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        let a = self.0.borrow();
        let b = other.0.borrow();
        a.kind == b.kind && a.items == b.items
    }
}

impl fmt::Debug for ListTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.borrow().items.iter()).finish()
    }
}
