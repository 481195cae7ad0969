/// The kind discriminant of an NBT tag.
///
/// The numeric values match the tag ids of the binary NBT format, so a
/// codec layered on top of this crate can cast a `TagID` to its wire byte
/// directly.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum TagID {
    End = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteArray = 7,
    String = 8,
    List = 9,
    Compound = 10,
    IntArray = 11,
    LongArray = 12,
}

impl TagID {
    /// Creates a `TagID` from a raw byte value, or `None` if the byte is
    /// not a valid tag id (0-12).
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::End),
            1 => Some(Self::Byte),
            2 => Some(Self::Short),
            3 => Some(Self::Int),
            4 => Some(Self::Long),
            5 => Some(Self::Float),
            6 => Some(Self::Double),
            7 => Some(Self::ByteArray),
            8 => Some(Self::String),
            9 => Some(Self::List),
            10 => Some(Self::Compound),
            11 => Some(Self::IntArray),
            12 => Some(Self::LongArray),
            _ => None,
        }
    }

    /// Returns `true` if this is a primitive tag kind.
    ///
    /// Primitive tags are: End, Byte, Short, Int, Long, Float, Double.
    /// These tags store a single value without additional structure.
    ///
    /// # Example
    ///
    /// ```
    /// use nbt_tree::TagID;
    ///
    /// assert!(TagID::Int.is_primitive());
    /// assert!(TagID::Double.is_primitive());
    /// assert!(!TagID::List.is_primitive());
    /// assert!(!TagID::ByteArray.is_primitive());
    /// ```
    pub const fn is_primitive(self) -> bool {
        matches!(
            self,
            Self::End
                | Self::Byte
                | Self::Short
                | Self::Int
                | Self::Long
                | Self::Float
                | Self::Double
        )
    }

    /// Returns `true` if this is an array tag kind.
    ///
    /// Array tags are: ByteArray, IntArray, LongArray.
    /// These store a fixed-length contiguous buffer of numeric values.
    ///
    /// # Example
    ///
    /// ```
    /// use nbt_tree::TagID;
    ///
    /// assert!(TagID::ByteArray.is_array());
    /// assert!(TagID::IntArray.is_array());
    /// assert!(TagID::LongArray.is_array());
    /// assert!(!TagID::List.is_array());
    /// ```
    pub const fn is_array(self) -> bool {
        matches!(self, Self::ByteArray | Self::IntArray | Self::LongArray)
    }

    /// Returns `true` if this is a composite tag kind.
    ///
    /// Composite tags are: List, Compound.
    /// These contain other tag values as children.
    ///
    /// # Example
    ///
    /// ```
    /// use nbt_tree::TagID;
    ///
    /// assert!(TagID::List.is_composite());
    /// assert!(TagID::Compound.is_composite());
    /// assert!(!TagID::Int.is_composite());
    /// assert!(!TagID::ByteArray.is_composite());
    /// ```
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::List | Self::Compound)
    }
}
