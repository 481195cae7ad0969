//! Serde support: maps a tag tree onto the serde data model.
//!
//! Compounds serialize as maps, lists and arrays as sequences, scalars as
//! their primitive types, and `End` as unit. Deserialization is not
//! provided; reconstructing a tree from self-describing input is a codec
//! concern that lives outside this crate.

use serde::ser::{Serialize, Serializer};

use crate::{ArrayTag, CompoundTag, ListTag, ScalarTag, Value};

impl<T: Serialize> Serialize for ScalarTag<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.borrow().serialize(serializer)
    }
}

impl<T: Serialize> Serialize for ArrayTag<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.borrow().iter())
    }
}

impl Serialize for ListTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl Serialize for CompoundTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::End => serializer.serialize_unit(),
            Value::Byte(tag) => tag.serialize(serializer),
            Value::Short(tag) => tag.serialize(serializer),
            Value::Int(tag) => tag.serialize(serializer),
            Value::Long(tag) => tag.serialize(serializer),
            Value::Float(tag) => tag.serialize(serializer),
            Value::Double(tag) => tag.serialize(serializer),
            Value::ByteArray(tag) => tag.serialize(serializer),
            Value::String(tag) => tag.serialize(serializer),
            Value::List(tag) => tag.serialize(serializer),
            Value::Compound(tag) => tag.serialize(serializer),
            Value::IntArray(tag) => tag.serialize(serializer),
            Value::LongArray(tag) => tag.serialize(serializer),
        }
    }
}
