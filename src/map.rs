//! Ordered map type for KV objects.
//!
//! This module provides [`KvMap`], a wrapper around [`IndexMap`] that keeps
//! object entries in insertion order. Rendering walks entries in that order,
//! so a document written twice from the same tree is byte-identical.
//!
//! Equality between two maps ignores order: two objects are equal when they
//! have the same key set and equal values under every key.
//!
//! ## Examples
//!
//! ```rust
//! use serde_kv::{KvMap, Value};
//!
//! let mut map = KvMap::new();
//! map.insert("name", "Alice");
//! map.insert("age", 30);
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::Value;
use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// An ordered map of string keys to KV values.
///
/// Keys are unique. Inserting an existing key replaces its value but keeps
/// the key in its original position.
///
/// # Examples
///
/// ```rust
/// use serde_kv::{KvMap, Value};
///
/// let map = KvMap::from([("first", Value::from(1)), ("second", Value::from(2))]);
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KvMap(IndexMap<String, Value>);

impl KvMap {
    /// Creates an empty `KvMap`.
    #[must_use]
    pub fn new() -> Self {
        KvMap(IndexMap::new())
    }

    /// Creates an empty `KvMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        KvMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the key keeps its slot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_kv::KvMap;
    ///
    /// let mut map = KvMap::new();
    /// assert!(map.insert("key", 42).is_none());
    /// assert!(map.insert("key", 43).is_some());
    /// ```
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<Value>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.0.insert(key.into(), value.into())
    }

    /// Inserts with duplicate-key merge semantics (see [`crate::merge`]).
    pub(crate) fn merge_insert(&mut self, key: String, value: Value) {
        match self.0.get_mut(&key) {
            Some(slot) => {
                tracing::trace!(key = %key, "merging duplicate key");
                crate::merge::merge_into(slot, value);
            }
            None => {
                self.0.insert(key, value);
            }
        }
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl IntoIterator for KvMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a KvMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for KvMap
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        KvMap(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for KvMap
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl Serialize for KvMap {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for KvMap {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Object(map) => Ok(map),
            other => Err(de::Error::invalid_type(
                de::Unexpected::Other(other.type_name()),
                &"a KV object",
            )),
        }
    }
}
