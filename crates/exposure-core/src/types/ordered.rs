//! Insertion-ordered map.
//!
//! Breakdowns, fund weights and portfolios all need a map that remembers the
//! order keys were first inserted: area order drives chart order, and Top-N
//! ranking breaks ties by first appearance.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

/// A map that iterates in insertion order.
///
/// Backed by [`IndexMap`]. Re-inserting an existing key replaces the value in
/// place, keeping the original position. Unlike `IndexMap`, equality is
/// order-sensitive: two breakdowns listing the same areas in a different
/// order are different charts.
#[derive(Clone, Serialize, Deserialize)]
#[serde(
    transparent,
    bound(
        serialize = "K: Serialize + Hash + Eq, V: Serialize",
        deserialize = "K: Deserialize<'de> + Hash + Eq, V: Deserialize<'de>"
    )
)]
pub struct OrderedMap<K, V> {
    inner: IndexMap<K, V>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self {
            inner: IndexMap::new(),
        }
    }
}

impl<K: Hash + Eq, V> OrderedMap<K, V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: IndexMap::with_capacity(capacity),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the value for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(key)
    }

    /// Returns the stored key and value for `key`.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get_key_value(key)
    }

    /// Returns a mutable reference to the value for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get_mut(key)
    }

    /// True if `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(key)
    }

    /// Position of `key` in iteration order.
    pub fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get_index_of(key)
    }

    /// Inserts a value, returning the previous value if the key existed.
    ///
    /// An existing key keeps its position.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.inner.insert(key, value)
    }

    /// Returns the value for `key`, appending `default()` first if absent.
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        self.inner.entry(key).or_insert_with(default)
    }

    /// Removes `key`, shifting later entries down to keep their order.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.shift_remove(key)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> + ExactSizeIterator {
        self.inner.iter()
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.inner.keys()
    }

    /// Iterates values in insertion order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.inner.values()
    }

    /// Iterates values mutably in insertion order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.inner.values_mut()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.inner.len() == other.inner.len() && self.inner.iter().eq(other.inner.iter())
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.inner.iter()).finish()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<K: Hash + Eq, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order() {
        let mut map = OrderedMap::new();
        map.insert("c", 3);
        map.insert("a", 1);
        map.insert("b", 2);

        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut map = OrderedMap::new();
        map.insert("x", 1);
        map.insert("y", 2);
        assert_eq!(map.insert("x", 10), Some(1));

        let entries: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(entries, vec![("x", 10), ("y", 2)]);
    }

    #[test]
    fn test_get_or_insert_with() {
        let mut map: OrderedMap<String, f64> = OrderedMap::new();
        *map.get_or_insert_with("a".to_string(), || 0.0) += 1.5;
        *map.get_or_insert_with("a".to_string(), || 0.0) += 1.5;
        assert_eq!(map.get("a"), Some(&3.0));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut map: OrderedMap<&str, i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
        assert_eq!(map.remove("a"), Some(1));
        assert_eq!(map.get("c"), Some(&3));
        assert_eq!(map.position("c"), Some(1));
        assert_eq!(map.remove("a"), None);
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let a: OrderedMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
        let b: OrderedMap<&str, i32> = [("b", 2), ("a", 1)].into_iter().collect();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_serde_preserves_order() {
        let json = r#"{"zeta":1,"alpha":2,"mid":3}"#;
        let map: OrderedMap<String, i32> = serde_json::from_str(json).unwrap();
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(serde_json::to_string(&map).unwrap(), json);
    }
}
