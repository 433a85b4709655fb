//! Immutable, insertion-ordered map.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use super::{IndexHashMap, index_hash_map_with_capacity};
use crate::ReferenceCounter;
use crate::error::{CollectionError, Result};
use crate::hash::HashCode;

struct MapStorage<K, V> {
    entries: Vec<(K, V)>,
    positions: IndexHashMap<K, usize>,
}

/// An immutable map with unique keys that iterates in insertion order.
///
/// Two maps are equal when they hold the same key/value pairs, regardless of
/// order.
///
/// # Examples
///
/// ```rust
/// use setwise::immutables::ImmutableMap;
///
/// let map = ImmutableMap::try_copy_of([("b", 2), ("a", 1)]).unwrap();
/// assert_eq!(map.get("a"), Some(&1));
/// assert_eq!(map.to_string(), "{b=2, a=1}");
///
/// assert!(ImmutableMap::try_copy_of([("a", 1), ("a", 2)]).is_err());
/// ```
pub struct ImmutableMap<K, V> {
    storage: ReferenceCounter<MapStorage<K, V>>,
}

impl<K, V> ImmutableMap<K, V> {
    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.entries.len()
    }

    /// Returns `true` if the map has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.entries.is_empty()
    }

    /// Returns an iterator over the entries in insertion order.
    pub fn iter(&self) -> ImmutableMapIter<'_, K, V> {
        ImmutableMapIter {
            entries: self.storage.entries.iter(),
        }
    }

    /// Returns an iterator over the keys in insertion order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.storage.entries.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values in key insertion order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.storage.entries.iter().map(|(_, value)| value)
    }
}

impl<K: Clone + Hash + Eq, V> ImmutableMap<K, V> {
    /// Creates an empty map.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            storage: ReferenceCounter::new(MapStorage {
                entries: Vec::new(),
                positions: index_hash_map_with_capacity(0),
            }),
        }
    }

    /// Creates a map from `entries`, whose keys must be distinct.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` naming the first repeated key.
    pub fn try_copy_of<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: fmt::Debug,
    {
        let iterator = entries.into_iter();
        let mut positions = index_hash_map_with_capacity(iterator.size_hint().0);
        let mut collected = Vec::with_capacity(iterator.size_hint().0);
        for (key, value) in iterator {
            if positions.contains_key(&key) {
                return Err(CollectionError::invalid_argument(format!(
                    "Multiple entries with same key: {key:?}"
                )));
            }
            positions.insert(key.clone(), collected.len());
            collected.push((key, value));
        }
        Ok(Self {
            storage: ReferenceCounter::new(MapStorage {
                entries: collected,
                positions,
            }),
        })
    }

    /// Builds a map from entries whose keys are already known to be distinct.
    pub(crate) fn from_distinct_entries(entries: Vec<(K, V)>) -> Self {
        let mut positions = index_hash_map_with_capacity(entries.len());
        for (position, (key, _)) in entries.iter().enumerate() {
            positions.insert(key.clone(), position);
        }
        Self {
            storage: ReferenceCounter::new(MapStorage { entries, positions }),
        }
    }

    /// Returns the value for `key`, if present.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.storage
            .positions
            .get(key)
            .and_then(|position| self.storage.entries.get(*position))
            .map(|(_, value)| value)
    }

    /// Returns the stored key and its value for `key`, if present.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.storage
            .positions
            .get(key)
            .and_then(|position| self.storage.entries.get(*position))
            .map(|(key, value)| (key, value))
    }

    /// Returns `true` if the map has an entry for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.storage.positions.contains_key(key)
    }
}

/// Iterator over the entries of an [`ImmutableMap`] in insertion order.
pub struct ImmutableMapIter<'a, K, V> {
    entries: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for ImmutableMapIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for ImmutableMapIter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back().map(|(key, value)| (key, value))
    }
}

impl<K, V> ExactSizeIterator for ImmutableMapIter<'_, K, V> {}

impl<K, V> Clone for ImmutableMapIter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a ImmutableMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = ImmutableMapIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Clone for ImmutableMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            storage: ReferenceCounter::clone(&self.storage),
        }
    }
}

impl<K: Clone + Hash + Eq, V> Default for ImmutableMap<K, V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<K: Clone + Hash + Eq, V: PartialEq> PartialEq for ImmutableMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        if ReferenceCounter::ptr_eq(&self.storage, &other.storage) {
            return true;
        }
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|other| other == value))
    }
}

impl<K: Clone + Hash + Eq, V: Eq> Eq for ImmutableMap<K, V> {}

impl<K: HashCode, V: HashCode> HashCode for ImmutableMap<K, V> {
    fn hash_code(&self) -> i32 {
        self.iter().fold(0_i32, |sum, (key, value)| {
            sum.wrapping_add(key.hash_code() ^ value.hash_code())
        })
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ImmutableMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for ImmutableMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (position, (key, value)) in self.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}={value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K: serde::Serialize, V: serde::Serialize> serde::Serialize for ImmutableMap<K, V> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for ImmutableMap<K, V>
where
    K: serde::Deserialize<'de> + Clone + Hash + Eq + fmt::Debug,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct EntriesVisitor<K, V>(std::marker::PhantomData<(K, V)>);

        impl<'de, K, V> serde::de::Visitor<'de> for EntriesVisitor<K, V>
        where
            K: serde::Deserialize<'de>,
            V: serde::Deserialize<'de>,
        {
            type Value = Vec<(K, V)>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry()? {
                    entries.push(entry);
                }
                Ok(entries)
            }
        }

        let entries = deserializer.deserialize_map(EntriesVisitor(std::marker::PhantomData))?;
        Self::try_copy_of(entries).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_try_copy_of_preserves_insertion_order() {
        let map = ImmutableMap::try_copy_of([(3, "c"), (1, "a"), (2, "b")]).unwrap();
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!(map.values().copied().collect::<Vec<_>>(), vec!["c", "a", "b"]);
        assert_eq!(map.iter().next_back(), Some((&2, &"b")));
        assert_eq!(map.iter().len(), 3);
    }

    #[rstest]
    fn test_try_copy_of_rejects_duplicate_keys() {
        let result = ImmutableMap::try_copy_of([("k", 1), ("k", 2)]);
        assert_eq!(
            result,
            Err(CollectionError::invalid_argument(
                "Multiple entries with same key: \"k\""
            ))
        );
    }

    #[rstest]
    fn test_get_with_borrowed_key() {
        let map = ImmutableMap::try_copy_of([("one".to_string(), 1)]).unwrap();
        assert_eq!(map.get("one"), Some(&1));
        assert_eq!(map.get("two"), None);
        assert!(map.contains_key("one"));
        assert_eq!(map.get_key_value("one"), Some((&"one".to_string(), &1)));
    }

    #[rstest]
    fn test_equality_ignores_order() {
        let left = ImmutableMap::try_copy_of([(1, 'a'), (2, 'b')]).unwrap();
        let right = ImmutableMap::try_copy_of([(2, 'b'), (1, 'a')]).unwrap();
        let different = ImmutableMap::try_copy_of([(2, 'x'), (1, 'a')]).unwrap();
        assert_eq!(left, right);
        assert_ne!(left, different);
    }

    #[rstest]
    fn test_hash_code_sums_entries() {
        let map = ImmutableMap::try_copy_of([(1, 2), (3, 4)]).unwrap();
        assert_eq!(map.hash_code(), (1 ^ 2) + (3 ^ 4));
    }

    #[rstest]
    fn test_display() {
        let map = ImmutableMap::try_copy_of([("x", 1), ("y", 2)]).unwrap();
        assert_eq!(map.to_string(), "{x=1, y=2}");
        assert_eq!(ImmutableMap::<i32, i32>::empty().to_string(), "{}");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_round_trip() {
        let map = ImmutableMap::try_copy_of([("a".to_string(), 1), ("b".to_string(), 2)]).unwrap();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"a":1,"b":2}"#);
        let restored: ImmutableMap<String, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, map);
    }
}
