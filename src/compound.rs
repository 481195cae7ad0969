//! Compound tag nodes: string-keyed collections of heterogeneous tags.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::{Error, Result, Value};

/// Storage discipline backing a compound.
///
/// Ordered storage keeps insertion order, which a byte-exact binary codec
/// needs because compound-entry order is significant on the wire. Hashed
/// storage gives faster average-case lookup with unspecified iteration
/// order. Lookup in ordered storage is a linear scan; compounds in game
/// data are small enough that this does not matter in practice.
enum MapInner {
    Ordered(Vec<(String, Value)>),
    Hashed(HashMap<String, Value>),
}

/// A compound tag node: a mapping from string keys to tag values.
///
/// Keys are unique; inserting an existing key replaces the prior value.
/// Compounds are heterogeneous, so insertion never checks kinds (only
/// [`Value::End`] is refused). The storage discipline is chosen per node
/// at construction ([`new`](CompoundTag::new) for insertion-ordered,
/// [`hashed`](CompoundTag::hashed) for hash-ordered) and never changes;
/// equality is discipline-agnostic.
///
/// Cloning the handle aliases the node; [`deep_clone`](CompoundTag::deep_clone)
/// recursively copies the entries.
///
/// # Example
///
/// ```
/// use nbt_tree::{CompoundTag, Value};
///
/// let root = CompoundTag::new();
/// root.insert("hp", Value::from(20i32)).unwrap();
/// assert_eq!(root.get("hp").unwrap().int(), Ok(20));
/// assert!(root.get("mp").is_err());
/// ```
pub struct CompoundTag(Rc<RefCell<MapInner>>);

impl CompoundTag {
    /// Creates an empty compound with insertion-ordered storage.
    ///
    /// Iteration reflects insertion order, as a byte-exact round trip of a
    /// decoded document requires.
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(MapInner::Ordered(Vec::new()))))
    }

    /// Creates an empty compound with hash-ordered storage.
    ///
    /// Lookup is average-case constant time; iteration order is
    /// unspecified.
    pub fn hashed() -> Self {
        Self(Rc::new(RefCell::new(MapInner::Hashed(HashMap::new()))))
    }

    /// Reports whether this compound preserves insertion order.
    pub fn is_ordered(&self) -> bool {
        matches!(*self.0.borrow(), MapInner::Ordered(_))
    }

    pub fn len(&self) -> usize {
        match &*self.0.borrow() {
            MapInner::Ordered(entries) => entries.len(),
            MapInner::Hashed(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts `value` under `key`, returning the replaced value if the
    /// key was already present.
    ///
    /// In an ordered compound a replaced key keeps its original position.
    /// Fails with [`Error::EndValue`] if `value` is [`Value::End`]; the
    /// compound is left unchanged.
    pub fn insert(&self, key: impl Into<String>, value: Value) -> Result<Option<Value>> {
        if value.is_end() {
            return Err(Error::EndValue);
        }
        let key = key.into();
        match &mut *self.0.borrow_mut() {
            MapInner::Ordered(entries) => {
                match entries.iter_mut().find(|(k, _)| *k == key) {
                    Some((_, slot)) => Ok(Some(std::mem::replace(slot, value))),
                    None => {
                        entries.push((key, value));
                        Ok(None)
                    }
                }
            }
            MapInner::Hashed(map) => Ok(map.insert(key, value)),
        }
    }

    /// Returns an aliasing handle to the value under `key`, or
    /// [`Error::KeyNotFound`].
    pub fn get(&self, key: &str) -> Result<Value> {
        match &*self.0.borrow() {
            MapInner::Ordered(entries) => entries
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone()),
            MapInner::Hashed(map) => map.get(key).cloned(),
        }
        .ok_or_else(|| Error::KeyNotFound(key.to_owned()))
    }

    /// Removes the entry under `key` and returns its value, or
    /// [`Error::KeyNotFound`].
    pub fn remove(&self, key: &str) -> Result<Value> {
        match &mut *self.0.borrow_mut() {
            MapInner::Ordered(entries) => entries
                .iter()
                .position(|(k, _)| k == key)
                .map(|i| entries.remove(i).1),
            MapInner::Hashed(map) => map.remove(key),
        }
        .ok_or_else(|| Error::KeyNotFound(key.to_owned()))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        match &*self.0.borrow() {
            MapInner::Ordered(entries) => entries.iter().any(|(k, _)| k == key),
            MapInner::Hashed(map) => map.contains_key(key),
        }
    }

    /// The keys, in discipline order.
    pub fn keys(&self) -> Vec<String> {
        match &*self.0.borrow() {
            MapInner::Ordered(entries) => entries.iter().map(|(k, _)| k.clone()).collect(),
            MapInner::Hashed(map) => map.keys().cloned().collect(),
        }
    }

    /// Iterates over `(key, value)` pairs in discipline order. Values are
    /// aliasing handles.
    pub fn iter(&self) -> impl Iterator<Item = (String, Value)> {
        match &*self.0.borrow() {
            MapInner::Ordered(entries) => entries.clone(),
            MapInner::Hashed(map) => map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        }
        .into_iter()
    }

    /// Removes every entry.
    pub fn clear(&self) {
        match &mut *self.0.borrow_mut() {
            MapInner::Ordered(entries) => entries.clear(),
            MapInner::Hashed(map) => map.clear(),
        }
    }

    /// Returns `true` if `self` and `other` are aliases of the same node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Creates an independent compound with the same discipline and a deep
    /// copy of every entry.
    ///
    /// Does not terminate if the tree under this compound contains a
    /// reference cycle.
    pub fn deep_clone(&self) -> Self {
        match &*self.0.borrow() {
            MapInner::Ordered(entries) => Self(Rc::new(RefCell::new(MapInner::Ordered(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.deep_clone()))
                    .collect(),
            )))),
            MapInner::Hashed(map) => Self(Rc::new(RefCell::new(MapInner::Hashed(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.deep_clone()))
                    .collect(),
            )))),
        }
    }
}

impl Default for CompoundTag {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloning a handle aliases the node rather than copying the entries.
impl Clone for CompoundTag {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

/// Two compounds are equal iff they hold the same key set with equal
/// values per key, regardless of storage discipline or iteration order.
impl PartialEq for CompoundTag {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        if self.len() != other.len() {
            return false;
        }
        self.iter()
            .all(|(key, value)| other.get(&key).is_ok_and(|v| v == value))
    }
}

impl fmt::Debug for CompoundTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, value) in self.iter() {
            map.entry(&key, &value);
        }
        map.finish()
    }
}
