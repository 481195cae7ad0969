//! Uniform indexing into composite values.

use crate::{Result, Value};

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T> Sealed for &T where T: ?Sized + Sealed {}
}

/// A type usable as an index in [`Value::get`].
///
/// Implemented for `usize` (list element access) and for string types
/// (compound key access). This trait is sealed.
pub trait Index: private::Sealed {
    #[doc(hidden)]
    fn index_into(&self, value: &Value) -> Result<Value>;
}

impl Index for usize {
    #[inline]
    fn index_into(&self, value: &Value) -> Result<Value> {
        value.as_list()?.get(*self)
    }
}

impl Index for str {
    #[inline]
    fn index_into(&self, value: &Value) -> Result<Value> {
        value.as_compound()?.get(self)
    }
}

impl Index for String {
    #[inline]
    fn index_into(&self, value: &Value) -> Result<Value> {
        value.as_compound()?.get(self.as_str())
    }
}

impl<T: ?Sized + Index> Index for &T {
    #[inline]
    fn index_into(&self, value: &Value) -> Result<Value> {
        (**self).index_into(value)
    }
}
