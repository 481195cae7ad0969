//! Array tag nodes: fixed-length shared numeric buffers.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::{Error, Result};

/// A fixed-length numeric array tag node.
///
/// The buffer length is fixed at construction. No append, remove, or
/// resize operation exists; elements can only be read or overwritten in
/// place. This is what makes [`as_ptr`](ArrayTag::as_ptr) safe to hand to
/// an external dense numeric view: the buffer can never move or change
/// length while the node is alive. A caller that needs a different length
/// constructs a new array.
///
/// Cloning the handle aliases the node; [`deep_clone`](ArrayTag::deep_clone)
/// copies the buffer.
///
/// # Example
///
/// ```
/// use nbt_tree::ByteArrayTag;
///
/// let arr = ByteArrayTag::zeroed(4);
/// arr.set(2, 7).unwrap();
/// assert_eq!(arr.get(2), Ok(7));
/// assert!(arr.at(5).is_err());
/// ```
pub struct ArrayTag<T>(pub(crate) Rc<RefCell<Box<[T]>>>);

/// Fixed-length array of 8-bit signed integers.
pub type ByteArrayTag = ArrayTag<i8>;
/// Fixed-length array of 32-bit signed integers.
pub type IntArrayTag = ArrayTag<i32>;
/// Fixed-length array of 64-bit signed integers.
pub type LongArrayTag = ArrayTag<i64>;

impl<T> ArrayTag<T> {
    /// Adopts `values` as the node's fixed buffer.
    pub fn from_vec(values: Vec<T>) -> Self {
        Self(Rc::new(RefCell::new(values.into_boxed_slice())))
    }

    /// Number of elements. Invariant for the node's lifetime.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Overwrites the element at `index`.
    ///
    /// Fails with [`Error::OutOfBounds`] if `index >= len()`; the buffer is
    /// left unchanged.
    pub fn set(&self, index: usize, value: T) -> Result<()> {
        let mut buf = self.0.borrow_mut();
        let len = buf.len();
        match buf.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::OutOfBounds { index, len }),
        }
    }

    /// Runs `f` over a borrowed view of the buffer.
    pub fn with_slice<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.0.borrow())
    }

    /// Runs `f` over a mutable borrowed view of the buffer.
    ///
    /// The view can overwrite elements but not change the length.
    pub fn with_slice_mut<R>(&self, f: impl FnOnce(&mut [T]) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }

    /// Returns a raw pointer to the first element.
    ///
    /// The pointer stays valid for the node's lifetime: the buffer is a
    /// boxed slice and never reallocates. It is invalidated only when the
    /// last handle to the node is dropped.
    pub fn as_ptr(&self) -> *const T {
        self.0.borrow().as_ptr()
    }

    /// Returns `true` if `self` and `other` are aliases of the same node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Copy> ArrayTag<T> {
    /// Returns the element at `index`, or [`Error::OutOfBounds`].
    pub fn get(&self, index: usize) -> Result<T> {
        let buf = self.0.borrow();
        buf.get(index)
            .copied()
            .ok_or(Error::OutOfBounds { index, len: buf.len() })
    }

    /// Alias for [`get`](ArrayTag::get).
    pub fn at(&self, index: usize) -> Result<T> {
        self.get(index)
    }

    /// Overwrites every element with `value`.
    pub fn fill(&self, value: T) {
        self.0.borrow_mut().fill(value);
    }

    /// Returns a copy of the buffer contents.
    pub fn to_vec(&self) -> Vec<T> {
        self.0.borrow().to_vec()
    }

    /// Creates an independent node holding a copy of the buffer.
    pub fn deep_clone(&self) -> Self {
        Self::from_vec(self.to_vec())
    }
}

impl<T: Copy + Default> ArrayTag<T> {
    /// Allocates a zero-initialized buffer of `len` elements.
    pub fn zeroed(len: usize) -> Self {
        Self::from_vec(vec![T::default(); len])
    }
}

/// Cloning a handle aliases the node rather than copying the buffer.
impl<T> Clone for ArrayTag<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> From<Vec<T>> for ArrayTag<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T: Copy> From<&[T]> for ArrayTag<T> {
    fn from(values: &[T]) -> Self {
        Self::from_vec(values.to_vec())
    }
}

/// Equality compares buffer contents, not node identity.
impl<T: PartialEq> PartialEq for ArrayTag<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.0.borrow() == *other.0.borrow()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayTag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.borrow().fmt(f)
    }
}
