//! The tag value sum type held by every compound entry and list element.

use crate::{
    ByteArrayTag, ByteTag, CompoundTag, DoubleTag, Error, FloatTag, IntArrayTag, IntTag, Index,
    ListTag, LongArrayTag, LongTag, Result, ShortTag, StringTag, TagID,
};

/// A tag value: the discriminated union over every tag kind.
///
/// Each non-`End` variant holds a shared handle to its node, so cloning a
/// `Value` aliases the node rather than copying it. `End` marks the
/// absence of a value; it exists only transiently during construction and
/// is refused by both containers, so a well-formed tree never stores it.
///
/// Accessors are checked: asking for a different discriminant than the
/// stored one fails with [`Error::KindMismatch`]. There is no implicit
/// conversion between discriminants, not even between integer widths.
///
/// # Example
///
/// ```
/// use nbt_tree::{TagID, Value};
///
/// let value = Value::from(20i32);
/// assert_eq!(value.kind(), TagID::Int);
/// assert_eq!(value.int(), Ok(20));
/// assert!(value.long().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// The absent value. Never stored in a well-formed tree.
    #[default]
    End,
    Byte(ByteTag),
    Short(ShortTag),
    Int(IntTag),
    Long(LongTag),
    Float(FloatTag),
    Double(DoubleTag),
    ByteArray(ByteArrayTag),
    String(StringTag),
    List(ListTag),
    Compound(CompoundTag),
    IntArray(IntArrayTag),
    LongArray(LongArrayTag),
}

macro_rules! checked_accessor {
    ($(#[$doc:meta] $name:ident, $variant:ident, $tag:ty;)*) => {
        $(
            #[$doc]
            ///
            /// Fails with [`Error::KindMismatch`] if the stored
            /// discriminant differs.
            pub fn $name(&self) -> Result<&$tag> {
                match self {
                    Self::$variant(tag) => Ok(tag),
                    _ => Err(Error::KindMismatch {
                        expected: TagID::$variant,
                        actual: self.kind(),
                    }),
                }
            }
        )*
    };
}

macro_rules! scalar_reader {
    ($(#[$doc:meta] $name:ident, $accessor:ident, $prim:ty;)*) => {
        $(
            #[$doc]
            pub fn $name(&self) -> Result<$prim> {
                Ok(self.$accessor()?.get())
            }
        )*
    };
}

impl Value {
    /// The stored kind discriminant.
    pub fn kind(&self) -> TagID {
        match self {
            Self::End => TagID::End,
            Self::Byte(_) => TagID::Byte,
            Self::Short(_) => TagID::Short,
            Self::Int(_) => TagID::Int,
            Self::Long(_) => TagID::Long,
            Self::Float(_) => TagID::Float,
            Self::Double(_) => TagID::Double,
            Self::ByteArray(_) => TagID::ByteArray,
            Self::String(_) => TagID::String,
            Self::List(_) => TagID::List,
            Self::Compound(_) => TagID::Compound,
            Self::IntArray(_) => TagID::IntArray,
            Self::LongArray(_) => TagID::LongArray,
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Self::End)
    }

    checked_accessor! {
        /// The held [`ByteTag`].
        as_byte, Byte, ByteTag;
        /// The held [`ShortTag`].
        as_short, Short, ShortTag;
        /// The held [`IntTag`].
        as_int, Int, IntTag;
        /// The held [`LongTag`].
        as_long, Long, LongTag;
        /// The held [`FloatTag`].
        as_float, Float, FloatTag;
        /// The held [`DoubleTag`].
        as_double, Double, DoubleTag;
        /// The held [`ByteArrayTag`].
        as_byte_array, ByteArray, ByteArrayTag;
        /// The held [`StringTag`].
        as_string, String, StringTag;
        /// The held [`ListTag`].
        as_list, List, ListTag;
        /// The held [`CompoundTag`].
        as_compound, Compound, CompoundTag;
        /// The held [`IntArrayTag`].
        as_int_array, IntArray, IntArrayTag;
        /// The held [`LongArrayTag`].
        as_long_array, LongArray, LongArrayTag;
    }

    scalar_reader! {
        /// The held byte value, if this is a [`Value::Byte`].
        byte, as_byte, i8;
        /// The held short value, if this is a [`Value::Short`].
        short, as_short, i16;
        /// The held int value, if this is a [`Value::Int`].
        int, as_int, i32;
        /// The held long value, if this is a [`Value::Long`].
        long, as_long, i64;
        /// The held float value, if this is a [`Value::Float`].
        float, as_float, f32;
        /// The held double value, if this is a [`Value::Double`].
        double, as_double, f64;
        /// A copy of the held string, if this is a [`Value::String`].
        string, as_string, String;
    }

    /// Indexes into a composite value.
    ///
    /// A `usize` index reads a [`ListTag`] element; a string index reads a
    /// [`CompoundTag`] entry. Indexing a value of any other kind fails
    /// with [`Error::KindMismatch`].
    ///
    /// # Example
    ///
    /// ```
    /// use nbt_tree::{CompoundTag, ListTag, Value};
    ///
    /// let root = CompoundTag::new();
    /// let tags = ListTag::new();
    /// tags.push(Value::from("poison")).unwrap();
    /// root.insert("tags", Value::List(tags)).unwrap();
    ///
    /// let root = Value::Compound(root);
    /// assert_eq!(root.get("tags").unwrap().get(0).unwrap().string().unwrap(), "poison");
    /// ```
    pub fn get(&self, index: impl Index) -> Result<Value> {
        index.index_into(self)
    }

    /// Returns `true` if `self` and `other` alias the same node.
    ///
    /// Two `End` values are considered identical. Values of different
    /// kinds, or equal-but-distinct nodes, are not.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::End, Self::End) => true,
            (Self::Byte(a), Self::Byte(b)) => a.ptr_eq(b),
            (Self::Short(a), Self::Short(b)) => a.ptr_eq(b),
            (Self::Int(a), Self::Int(b)) => a.ptr_eq(b),
            (Self::Long(a), Self::Long(b)) => a.ptr_eq(b),
            (Self::Float(a), Self::Float(b)) => a.ptr_eq(b),
            (Self::Double(a), Self::Double(b)) => a.ptr_eq(b),
            (Self::ByteArray(a), Self::ByteArray(b)) => a.ptr_eq(b),
            (Self::String(a), Self::String(b)) => a.ptr_eq(b),
            (Self::List(a), Self::List(b)) => a.ptr_eq(b),
            (Self::Compound(a), Self::Compound(b)) => a.ptr_eq(b),
            (Self::IntArray(a), Self::IntArray(b)) => a.ptr_eq(b),
            (Self::LongArray(a), Self::LongArray(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Recursively copies the tree under this value into independent
    /// nodes.
    ///
    /// Does not terminate if the tree contains a reference cycle; keeping
    /// the tree acyclic is the caller's responsibility.
    pub fn deep_clone(&self) -> Self {
        match self {
            Self::End => Self::End,
            Self::Byte(tag) => Self::Byte(tag.deep_clone()),
            Self::Short(tag) => Self::Short(tag.deep_clone()),
            Self::Int(tag) => Self::Int(tag.deep_clone()),
            Self::Long(tag) => Self::Long(tag.deep_clone()),
            Self::Float(tag) => Self::Float(tag.deep_clone()),
            Self::Double(tag) => Self::Double(tag.deep_clone()),
            Self::ByteArray(tag) => Self::ByteArray(tag.deep_clone()),
            Self::String(tag) => Self::String(tag.deep_clone()),
            Self::List(tag) => Self::List(tag.deep_clone()),
            Self::Compound(tag) => Self::Compound(tag.deep_clone()),
            Self::IntArray(tag) => Self::IntArray(tag.deep_clone()),
            Self::LongArray(tag) => Self::LongArray(tag.deep_clone()),
        }
    }
}

macro_rules! from_tag {
    ($($variant:ident, $tag:ty;)*) => {
        $(
            impl From<$tag> for Value {
                fn from(tag: $tag) -> Self {
                    Self::$variant(tag)
                }
            }
        )*
    };
}

from_tag! {
    Byte, ByteTag;
    Short, ShortTag;
    Int, IntTag;
    Long, LongTag;
    Float, FloatTag;
    Double, DoubleTag;
    ByteArray, ByteArrayTag;
    String, StringTag;
    List, ListTag;
    Compound, CompoundTag;
    IntArray, IntArrayTag;
    LongArray, LongArrayTag;
}

macro_rules! from_primitive {
    ($($variant:ident, $tag:ident, $prim:ty;)*) => {
        $(
            impl From<$prim> for Value {
                fn from(value: $prim) -> Self {
                    Self::$variant($tag::from(value))
                }
            }
        )*
    };
}

from_primitive! {
    Byte, ByteTag, i8;
    Short, ShortTag, i16;
    Int, IntTag, i32;
    Long, LongTag, i64;
    Float, FloatTag, f32;
    Double, DoubleTag, f64;
    String, StringTag, String;
    ByteArray, ByteArrayTag, Vec<i8>;
    IntArray, IntArrayTag, Vec<i32>;
    LongArray, LongArrayTag, Vec<i64>;
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(StringTag::from(value))
    }
}
