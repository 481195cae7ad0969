//! Scalar tag nodes: shared mutable cells holding a single primitive value.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// A scalar tag node.
///
/// The held kind is fixed by the type parameter: a tag created as an
/// [`IntTag`] can never become a [`StringTag`]. The held *value* lives in a
/// shared mutable cell, so cloning the handle produces another alias of the
/// same node and [`set`](ScalarTag::set) through one alias is visible
/// through every other.
///
/// # Example
///
/// ```
/// use nbt_tree::IntTag;
///
/// let hp = IntTag::new(20);
/// let alias = hp.clone();
/// alias.set(15);
/// assert_eq!(hp.get(), 15);
/// assert!(hp.ptr_eq(&alias));
/// ```
pub struct ScalarTag<T>(pub(crate) Rc<RefCell<T>>);

/// 8-bit signed integer tag.
pub type ByteTag = ScalarTag<i8>;
/// 16-bit signed integer tag.
pub type ShortTag = ScalarTag<i16>;
/// 32-bit signed integer tag.
pub type IntTag = ScalarTag<i32>;
/// 64-bit signed integer tag.
pub type LongTag = ScalarTag<i64>;
/// 32-bit floating point tag.
pub type FloatTag = ScalarTag<f32>;
/// 64-bit floating point tag.
pub type DoubleTag = ScalarTag<f64>;
/// UTF-8 string tag.
pub type StringTag = ScalarTag<String>;

impl<T> ScalarTag<T> {
    /// Creates a new scalar node holding `value`.
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    /// Overwrites the held value in place.
    ///
    /// The write is visible through every alias of this node.
    pub fn set(&self, value: T) {
        *self.0.borrow_mut() = value;
    }

    /// Overwrites the held value and returns the previous one.
    pub fn replace(&self, value: T) -> T {
        self.0.replace(value)
    }

    /// Returns `true` if `self` and `other` are aliases of the same node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Clone> ScalarTag<T> {
    /// Returns a copy of the held value.
    pub fn get(&self) -> T {
        self.0.borrow().clone()
    }

    /// Creates an independent node holding a copy of the current value.
    pub fn deep_clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl StringTag {
    /// Length of the held string in bytes.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

/// Cloning a handle aliases the node rather than copying the value.
impl<T> Clone for ScalarTag<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: Default> Default for ScalarTag<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<T> for ScalarTag<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl From<&str> for StringTag {
    fn from(value: &str) -> Self {
        Self::new(value.to_owned())
    }
}

/// Equality compares held values, not node identity.
impl<T: PartialEq> PartialEq for ScalarTag<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.0.borrow() == *other.0.borrow()
    }
}

impl<T: PartialOrd> PartialOrd for ScalarTag<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.borrow().partial_cmp(&other.0.borrow())
    }
}

impl<T: fmt::Debug> fmt::Debug for ScalarTag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.borrow().fmt(f)
    }
}
