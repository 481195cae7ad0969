//! Tests for the Value sum type

use nbt_tree::{
    ByteArrayTag, CompoundTag, Error, IntArrayTag, IntTag, ListTag, LongArrayTag, StringTag,
    TagID, Value,
};

fn one_of_each() -> Vec<Value> {
    vec![
        Value::from(1i8),
        Value::from(1i16),
        Value::from(1i32),
        Value::from(1i64),
        Value::from(1.0f32),
        Value::from(1.0f64),
        Value::from(vec![1i8]),
        Value::from("s"),
        Value::List(ListTag::new()),
        Value::Compound(CompoundTag::new()),
        Value::from(vec![1i32]),
        Value::from(vec![1i64]),
    ]
}

#[test]
fn test_kind() {
    assert_eq!(Value::End.kind(), TagID::End);
    let kinds: Vec<TagID> = one_of_each().iter().map(Value::kind).collect();
    assert_eq!(
        kinds,
        vec![
            TagID::Byte,
            TagID::Short,
            TagID::Int,
            TagID::Long,
            TagID::Float,
            TagID::Double,
            TagID::ByteArray,
            TagID::String,
            TagID::List,
            TagID::Compound,
            TagID::IntArray,
            TagID::LongArray,
        ]
    );
}

#[test]
fn test_default_is_end() {
    let value = Value::default();
    assert!(value.is_end());
    assert_eq!(value.kind(), TagID::End);
}

#[test]
fn test_checked_accessors_succeed_on_matching_kind() {
    assert_eq!(Value::from(5i8).as_byte().unwrap().get(), 5);
    assert_eq!(Value::from(5i16).as_short().unwrap().get(), 5);
    assert_eq!(Value::from(5i32).as_int().unwrap().get(), 5);
    assert_eq!(Value::from(5i64).as_long().unwrap().get(), 5);
    assert_eq!(Value::from(0.5f32).as_float().unwrap().get(), 0.5);
    assert_eq!(Value::from(0.5f64).as_double().unwrap().get(), 0.5);
    assert_eq!(Value::from("s").as_string().unwrap().get(), "s");
    assert_eq!(Value::from(vec![1i8]).as_byte_array().unwrap().len(), 1);
    assert_eq!(Value::from(vec![1i32]).as_int_array().unwrap().len(), 1);
    assert_eq!(Value::from(vec![1i64]).as_long_array().unwrap().len(), 1);
    assert!(Value::List(ListTag::new()).as_list().unwrap().is_empty());
    assert!(
        Value::Compound(CompoundTag::new())
            .as_compound()
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_checked_accessors_fail_on_other_kinds() {
    // Every accessor against every mismatched discriminant.
    for value in one_of_each() {
        let kind = value.kind();
        let failures = [
            (TagID::Byte, value.as_byte().is_err()),
            (TagID::Short, value.as_short().is_err()),
            (TagID::Int, value.as_int().is_err()),
            (TagID::Long, value.as_long().is_err()),
            (TagID::Float, value.as_float().is_err()),
            (TagID::Double, value.as_double().is_err()),
            (TagID::ByteArray, value.as_byte_array().is_err()),
            (TagID::String, value.as_string().is_err()),
            (TagID::List, value.as_list().is_err()),
            (TagID::Compound, value.as_compound().is_err()),
            (TagID::IntArray, value.as_int_array().is_err()),
            (TagID::LongArray, value.as_long_array().is_err()),
        ];
        for (requested, failed) in failures {
            assert_eq!(failed, requested != kind, "{requested:?} on {kind:?}");
        }
    }
}

#[test]
fn test_mismatch_error_names_both_kinds() {
    let value = Value::from(1i32);
    assert_eq!(
        value.as_string().unwrap_err(),
        Error::KindMismatch {
            expected: TagID::String,
            actual: TagID::Int,
        }
    );
}

#[test]
fn test_no_widening_between_numeric_kinds() {
    let value = Value::from(1i32);
    assert!(value.as_long().is_err());
    assert!(value.as_short().is_err());
    assert!(value.as_double().is_err());
}

#[test]
fn test_scalar_readers() {
    assert_eq!(Value::from(1i8).byte(), Ok(1));
    assert_eq!(Value::from(2i16).short(), Ok(2));
    assert_eq!(Value::from(3i32).int(), Ok(3));
    assert_eq!(Value::from(4i64).long(), Ok(4));
    assert_eq!(Value::from(0.5f32).float(), Ok(0.5));
    assert_eq!(Value::from(0.25f64).double(), Ok(0.25));
    assert_eq!(Value::from("s").string(), Ok("s".to_owned()));
    assert!(Value::from(1i8).int().is_err());
}

#[test]
fn test_from_handles() {
    let tag = IntTag::new(3);
    let value = Value::from(tag.clone());
    assert!(value.ptr_eq(&Value::Int(tag)));

    assert_eq!(Value::from(StringTag::from("x")).kind(), TagID::String);
    assert_eq!(Value::from(ByteArrayTag::zeroed(1)).kind(), TagID::ByteArray);
    assert_eq!(Value::from(IntArrayTag::zeroed(1)).kind(), TagID::IntArray);
    assert_eq!(Value::from(LongArrayTag::zeroed(1)).kind(), TagID::LongArray);
    assert_eq!(Value::from(ListTag::new()).kind(), TagID::List);
    assert_eq!(Value::from(CompoundTag::new()).kind(), TagID::Compound);
}

#[test]
fn test_equality() {
    assert_eq!(Value::End, Value::End);
    assert_eq!(Value::from(1i32), Value::from(1i32));
    assert_ne!(Value::from(1i32), Value::from(2i32));
    // Same numeric value, different kind.
    assert_ne!(Value::from(1i32), Value::from(1i64));
    assert_ne!(Value::from(1i32), Value::End);
}

#[test]
fn test_clone_is_shallow() {
    let value = Value::from(7i32);
    let alias = value.clone();
    assert!(value.ptr_eq(&alias));

    alias.as_int().unwrap().set(8);
    assert_eq!(value.int(), Ok(8));
}

#[test]
fn test_deep_clone_recurses() {
    let root = CompoundTag::new();
    let inner = ListTag::new();
    inner.push(Value::from(1i32)).unwrap();
    root.insert("list", Value::List(inner.clone())).unwrap();

    let copy = Value::Compound(root.clone()).deep_clone();
    assert_eq!(copy, Value::Compound(root.clone()));

    let copied_list = copy.get("list").unwrap();
    assert!(!copied_list.ptr_eq(&Value::List(inner.clone())));

    // Mutating the copy leaves the original untouched.
    copied_list.as_list().unwrap().push(Value::from(2i32)).unwrap();
    assert_eq!(inner.len(), 1);
}

#[test]
fn test_ptr_eq_distinguishes_equal_nodes() {
    let a = Value::from(1i32);
    let b = Value::from(1i32);
    assert_eq!(a, b);
    assert!(!a.ptr_eq(&b));
    assert!(a.ptr_eq(&a.clone()));
    assert!(Value::End.ptr_eq(&Value::End));
    assert!(!a.ptr_eq(&Value::from(1i64)));
}
