//! Immutable collections.
//!
//! This module provides collections that cannot change after construction.
//! Cloning any of them is O(1): the contents live behind a shared
//! reference counter.
//!
//! - [`ImmutableList`]: an ordered sequence
//! - [`ImmutableSet`]: an insertion-ordered, duplicate-free set
//! - [`ImmutableMap`]: an insertion-ordered map with unique keys
//!
//! The free functions build collections whose iteration order is fixed by
//! the element type or by a comparator:
//!
//! - [`immutable_enum_set`] and [`immutable_enum_map`] order enum values by
//!   declaration (through a derived `Ord`)
//! - [`immutable_sorted_copy`] sorts with any [`Comparator`]
//!
//! # Examples
//!
//! ```rust
//! use setwise::immutables::{ImmutableList, ImmutableMap, ImmutableSet};
//!
//! let list = ImmutableList::copy_of([3, 1, 2]);
//! assert_eq!(list.get(0), Ok(&3));
//!
//! let set = ImmutableSet::copy_of(["b", "a", "b"]);
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec!["b", "a"]);
//!
//! let map = ImmutableMap::try_copy_of([("one", 1), ("two", 2)]).unwrap();
//! assert_eq!(map.get("two"), Some(&2));
//! ```

use std::hash::Hash;

use crate::compare::Comparator;
use crate::error::Result;

mod list;
mod map;
mod set;

pub use list::ImmutableList;
pub use list::ImmutableListIntoIterator;
pub use map::{ImmutableMap, ImmutableMapIter};
pub use set::ImmutableSet;

// =============================================================================
// Index Hash Map Type Alias
// =============================================================================

/// Hash map used to look elements up by value.
///
/// With the `fxhash` feature this is backed by `rustc-hash`; with `ahash`
/// (and without `fxhash`) by `ahash`; otherwise by the standard library's
/// `HashMap`.
#[cfg(feature = "fxhash")]
pub(crate) type IndexHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type IndexHashMap<K, V> = ahash::AHashMap<K, V>;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type IndexHashMap<K, V> = std::collections::HashMap<K, V>;

pub(crate) fn index_hash_map_with_capacity<K: Hash + Eq, V>(capacity: usize) -> IndexHashMap<K, V> {
    let mut map = IndexHashMap::default();
    map.reserve(capacity);
    map
}

// =============================================================================
// Constructors
// =============================================================================

/// Creates an [`ImmutableSet`] of enum values in declaration order.
///
/// Declaration order is the order of a derived `Ord`. Duplicates are
/// dropped.
///
/// # Examples
///
/// ```rust
/// use setwise::immutables::immutable_enum_set;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// enum Suit { Clubs, Diamonds, Hearts, Spades }
///
/// let set = immutable_enum_set([Suit::Spades, Suit::Clubs, Suit::Spades]);
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![Suit::Clubs, Suit::Spades]);
/// ```
pub fn immutable_enum_set<E, I>(elements: I) -> ImmutableSet<E>
where
    E: Ord + Clone + Hash + Eq,
    I: IntoIterator<Item = E>,
{
    let mut sorted: Vec<E> = elements.into_iter().collect();
    sorted.sort();
    sorted.dedup();
    ImmutableSet::copy_of(sorted)
}

/// Creates an [`ImmutableMap`] keyed by enum values in declaration order.
///
/// # Errors
///
/// Returns `InvalidArgument` if a key occurs more than once.
///
/// # Examples
///
/// ```rust
/// use setwise::immutables::immutable_enum_map;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// enum Level { Low, Medium, High }
///
/// let map = immutable_enum_map([(Level::High, 3), (Level::Low, 1)]).unwrap();
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![Level::Low, Level::High]);
/// ```
pub fn immutable_enum_map<K, V, I>(entries: I) -> Result<ImmutableMap<K, V>>
where
    K: Ord + Clone + Hash + Eq + std::fmt::Debug,
    I: IntoIterator<Item = (K, V)>,
{
    let mut sorted: Vec<(K, V)> = entries.into_iter().collect();
    sorted.sort_by(|(left, _), (right, _)| left.cmp(right));
    ImmutableMap::try_copy_of(sorted)
}

/// Creates an [`ImmutableList`] holding `elements` sorted by `comparator`.
///
/// The sort is stable.
///
/// # Examples
///
/// ```rust
/// use setwise::compare::{natural, Comparator};
/// use setwise::immutables::immutable_sorted_copy;
///
/// let sorted = immutable_sorted_copy(["b", "c", "a"], &natural().reverse());
/// assert_eq!(sorted.as_slice(), &["c", "b", "a"]);
/// ```
pub fn immutable_sorted_copy<E, I, C>(elements: I, comparator: &C) -> ImmutableList<E>
where
    I: IntoIterator<Item = E>,
    C: Comparator<E> + ?Sized,
{
    let mut sorted: Vec<E> = elements.into_iter().collect();
    sorted.sort_by(|left, right| comparator.compare(left, right));
    ImmutableList::from(sorted)
}
