//! Map views and map utilities.
//!
//! - [`MapLike`]: read-only key lookup and entry iteration, implemented for
//!   `HashMap`, `BTreeMap` and [`ImmutableMap`]
//! - [`difference`] / [`difference_with`]: a [`MapDifference`] snapshot
//!   comparing two maps
//! - [`transform_values`] / [`transform_entries`]: lazy views that compute
//!   values on access
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use setwise::collect::maps;
//!
//! let left = BTreeMap::from([("a", 1), ("b", 2), ("c", 3)]);
//! let right = BTreeMap::from([("b", 2), ("c", 4), ("d", 5)]);
//!
//! let difference = maps::difference(&left, &right);
//! assert!(!difference.are_equal());
//! assert_eq!(
//!     difference.to_string(),
//!     "not equal: only on left={a=1}: only on right={d=5}: value differences={c=(3, 4)}"
//! );
//!
//! let doubled = maps::transform_values(&left, |value| value * 2);
//! assert_eq!(doubled.get(&"c"), Some(6));
//! ```

use std::collections::{BTreeMap, HashMap, btree_map, hash_map};
use std::fmt;
use std::hash::{BuildHasher, Hash};

use super::equivalence::{Equivalence, equals};
use crate::hash::HashCode;
use crate::immutables::{ImmutableMap, ImmutableMapIter};

// =============================================================================
// MapLike Trait
// =============================================================================

/// Read-only map capability.
pub trait MapLike {
    /// The key type.
    type Key;
    /// The value type.
    type Value;
    /// Iterator over entries.
    type Entries<'a>: Iterator<Item = (&'a Self::Key, &'a Self::Value)>
    where
        Self: 'a;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns the stored key and the value for `key`, if present.
    fn get_key_value(&self, key: &Self::Key) -> Option<(&Self::Key, &Self::Value)>;

    /// Returns an iterator over the entries in the map's own order.
    fn entries(&self) -> Self::Entries<'_>;

    /// Returns the value for `key`, if present.
    fn get(&self, key: &Self::Key) -> Option<&Self::Value> {
        self.get_key_value(key).map(|(_, value)| value)
    }

    /// Returns `true` if the map has an entry for `key`.
    fn contains_key(&self, key: &Self::Key) -> bool {
        self.get(key).is_some()
    }

    /// Returns `true` if the map has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> MapLike for HashMap<K, V, S> {
    type Key = K;
    type Value = V;
    type Entries<'a>
        = hash_map::Iter<'a, K, V>
    where
        Self: 'a;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        Self::get_key_value(self, key)
    }

    fn get(&self, key: &K) -> Option<&V> {
        Self::get(self, key)
    }

    fn entries(&self) -> Self::Entries<'_> {
        self.iter()
    }

    fn contains_key(&self, key: &K) -> bool {
        Self::contains_key(self, key)
    }
}

impl<K: Ord, V> MapLike for BTreeMap<K, V> {
    type Key = K;
    type Value = V;
    type Entries<'a>
        = btree_map::Iter<'a, K, V>
    where
        Self: 'a;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        Self::get_key_value(self, key)
    }

    fn get(&self, key: &K) -> Option<&V> {
        Self::get(self, key)
    }

    fn entries(&self) -> Self::Entries<'_> {
        self.iter()
    }

    fn contains_key(&self, key: &K) -> bool {
        Self::contains_key(self, key)
    }
}

impl<K: Clone + Hash + Eq, V> MapLike for ImmutableMap<K, V> {
    type Key = K;
    type Value = V;
    type Entries<'a>
        = ImmutableMapIter<'a, K, V>
    where
        Self: 'a;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        Self::get_key_value(self, key)
    }

    fn get(&self, key: &K) -> Option<&V> {
        Self::get(self, key)
    }

    fn entries(&self) -> Self::Entries<'_> {
        self.iter()
    }

    fn contains_key(&self, key: &K) -> bool {
        Self::contains_key(self, key)
    }
}

// =============================================================================
// Map Difference
// =============================================================================

/// The left and right values of a key whose values differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueDifference<V> {
    left: V,
    right: V,
}

impl<V> ValueDifference<V> {
    /// Returns the value in the left map.
    #[must_use]
    pub const fn left_value(&self) -> &V {
        &self.left
    }

    /// Returns the value in the right map.
    #[must_use]
    pub const fn right_value(&self) -> &V {
        &self.right
    }
}

impl<V: HashCode> HashCode for ValueDifference<V> {
    fn hash_code(&self) -> i32 {
        self.left
            .hash_code()
            .wrapping_mul(31)
            .wrapping_add(self.right.hash_code())
    }
}

impl<V: fmt::Display> fmt::Display for ValueDifference<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.left, self.right)
    }
}

/// A comparison of two maps.
///
/// Every key of either map lands in exactly one of the four parts.
/// Keys present on both sides keep the order of the left map; keys only
/// on the right keep the order of the right map.
#[derive(Debug, Clone)]
pub struct MapDifference<K, V> {
    only_on_left: ImmutableMap<K, V>,
    only_on_right: ImmutableMap<K, V>,
    on_both: ImmutableMap<K, V>,
    differences: ImmutableMap<K, ValueDifference<V>>,
}

impl<K, V> MapDifference<K, V> {
    /// Returns `true` if the maps have the same keys with equivalent values.
    #[must_use]
    pub fn are_equal(&self) -> bool {
        self.only_on_left.is_empty() && self.only_on_right.is_empty() && self.differences.is_empty()
    }

    /// Entries whose keys appear only in the left map.
    #[must_use]
    pub const fn entries_only_on_left(&self) -> &ImmutableMap<K, V> {
        &self.only_on_left
    }

    /// Entries whose keys appear only in the right map.
    #[must_use]
    pub const fn entries_only_on_right(&self) -> &ImmutableMap<K, V> {
        &self.only_on_right
    }

    /// Entries present in both maps with equivalent values, holding the
    /// left value.
    #[must_use]
    pub const fn entries_in_common(&self) -> &ImmutableMap<K, V> {
        &self.on_both
    }

    /// Keys present in both maps whose values are not equivalent.
    #[must_use]
    pub const fn entries_differing(&self) -> &ImmutableMap<K, ValueDifference<V>> {
        &self.differences
    }
}

impl<K: Clone + Hash + Eq, V: PartialEq> PartialEq for MapDifference<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.only_on_left == other.only_on_left
            && self.only_on_right == other.only_on_right
            && self.on_both == other.on_both
            && self.differences == other.differences
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for MapDifference<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.are_equal() {
            return write!(formatter, "equal");
        }
        write!(formatter, "not equal")?;
        if !self.only_on_left.is_empty() {
            write!(formatter, ": only on left={}", self.only_on_left)?;
        }
        if !self.only_on_right.is_empty() {
            write!(formatter, ": only on right={}", self.only_on_right)?;
        }
        if !self.differences.is_empty() {
            write!(formatter, ": value differences={}", self.differences)?;
        }
        Ok(())
    }
}

/// Compares two maps, treating values as equal when `==` says so.
pub fn difference<K, V, L, R>(left: &L, right: &R) -> MapDifference<K, V>
where
    K: Clone + Hash + Eq,
    V: Clone + PartialEq + HashCode,
    L: MapLike<Key = K, Value = V> + ?Sized,
    R: MapLike<Key = K, Value = V> + ?Sized,
{
    difference_with(left, right, &equals())
}

/// Compares two maps, treating values as equal when `equivalence` says so.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use setwise::collect::equivalence::Equivalence;
/// use setwise::collect::maps::difference_with;
///
/// struct SameLength;
///
/// impl Equivalence<String> for SameLength {
///     fn equivalent(&self, left: &String, right: &String) -> bool {
///         left.len() == right.len()
///     }
///
///     fn hash(&self, value: &String) -> i32 {
///         value.len() as i32
///     }
/// }
///
/// let left = HashMap::from([(1, "one".to_string())]);
/// let right = HashMap::from([(1, "two".to_string())]);
/// assert!(difference_with(&left, &right, &SameLength).are_equal());
/// ```
pub fn difference_with<K, V, L, R, Q>(left: &L, right: &R, equivalence: &Q) -> MapDifference<K, V>
where
    K: Clone + Hash + Eq,
    V: Clone,
    L: MapLike<Key = K, Value = V> + ?Sized,
    R: MapLike<Key = K, Value = V> + ?Sized,
    Q: Equivalence<V> + ?Sized,
{
    let mut only_on_left = Vec::new();
    let mut on_both = Vec::new();
    let mut differences = Vec::new();
    for (key, left_value) in left.entries() {
        match right.get(key) {
            None => only_on_left.push((key.clone(), left_value.clone())),
            Some(right_value) if equivalence.equivalent(left_value, right_value) => {
                on_both.push((key.clone(), left_value.clone()));
            }
            Some(right_value) => differences.push((
                key.clone(),
                ValueDifference {
                    left: left_value.clone(),
                    right: right_value.clone(),
                },
            )),
        }
    }
    let only_on_right = right
        .entries()
        .filter(|(key, _)| !left.contains_key(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    MapDifference {
        only_on_left: ImmutableMap::from_distinct_entries(only_on_left),
        only_on_right: ImmutableMap::from_distinct_entries(only_on_right),
        on_both: ImmutableMap::from_distinct_entries(on_both),
        differences: ImmutableMap::from_distinct_entries(differences),
    }
}

// =============================================================================
// Transformed Views
// =============================================================================

/// A map whose values are computed from another map's values on access.
pub struct TransformedValues<'a, M: ?Sized, F> {
    map: &'a M,
    function: F,
}

impl<'a, M, F, W> TransformedValues<'a, M, F>
where
    M: MapLike + ?Sized,
    F: Fn(&'a M::Value) -> W,
{
    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns `true` if the underlying map has `key`.
    pub fn contains_key(&self, key: &M::Key) -> bool {
        self.map.contains_key(key)
    }

    /// Computes the value for `key`, if present.
    pub fn get(&self, key: &M::Key) -> Option<W> {
        let map: &'a M = self.map;
        map.get(key).map(&self.function)
    }

    /// Returns an iterator over keys and computed values.
    pub fn iter(&self) -> impl Iterator<Item = (&'a M::Key, W)> {
        let map: &'a M = self.map;
        map.entries()
            .map(|(key, value)| (key, (self.function)(value)))
    }

    /// Returns an iterator over the keys.
    pub fn keys(&self) -> impl Iterator<Item = &'a M::Key> {
        let map: &'a M = self.map;
        map.entries().map(|(key, _)| key)
    }

    /// Returns an iterator over the computed values.
    pub fn values(&self) -> impl Iterator<Item = W> {
        let map: &'a M = self.map;
        map.entries().map(|(_, value)| (self.function)(value))
    }
}

/// Returns a view of `map` with every value passed through `function`.
pub const fn transform_values<M, F, W>(map: &M, function: F) -> TransformedValues<'_, M, F>
where
    M: MapLike + ?Sized,
    F: Fn(&M::Value) -> W,
{
    TransformedValues { map, function }
}

/// A map whose values are computed from another map's entries on access.
pub struct TransformedEntries<'a, M: ?Sized, F> {
    map: &'a M,
    function: F,
}

impl<'a, M, F, W> TransformedEntries<'a, M, F>
where
    M: MapLike + ?Sized,
    F: Fn(&'a M::Key, &'a M::Value) -> W,
{
    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns `true` if the underlying map has `key`.
    pub fn contains_key(&self, key: &M::Key) -> bool {
        self.map.contains_key(key)
    }

    /// Computes the value for `key`, if present.
    pub fn get(&self, key: &M::Key) -> Option<W> {
        let map: &'a M = self.map;
        map.get_key_value(key)
            .map(|(key, value)| (self.function)(key, value))
    }

    /// Returns an iterator over keys and computed values.
    pub fn iter(&self) -> impl Iterator<Item = (&'a M::Key, W)> {
        let map: &'a M = self.map;
        map.entries()
            .map(|(key, value)| (key, (self.function)(key, value)))
    }

    /// Returns an iterator over the keys.
    pub fn keys(&self) -> impl Iterator<Item = &'a M::Key> {
        let map: &'a M = self.map;
        map.entries().map(|(key, _)| key)
    }

    /// Returns an iterator over the computed values.
    pub fn values(&self) -> impl Iterator<Item = W> {
        let map: &'a M = self.map;
        map.entries().map(|(key, value)| (self.function)(key, value))
    }
}

/// Returns a view of `map` with every value computed from its entry.
pub const fn transform_entries<M, F, W>(map: &M, function: F) -> TransformedEntries<'_, M, F>
where
    M: MapLike + ?Sized,
    F: Fn(&M::Key, &M::Value) -> W,
{
    TransformedEntries { map, function }
}
