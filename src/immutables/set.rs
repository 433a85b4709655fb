//! Immutable, insertion-ordered set.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use super::{IndexHashMap, index_hash_map_with_capacity};
use crate::ReferenceCounter;
use crate::error::{CollectionError, Result, check_element_index};
use crate::hash::{HashCode, set_hash_code};

struct SetStorage<E> {
    elements: Vec<E>,
    ranks: IndexHashMap<E, usize>,
}

/// An immutable set that remembers the order in which elements were first
/// seen.
///
/// Each element has a rank: its position in iteration order. Ranks are a
/// dense permutation of `0..len()`.
///
/// Equality ignores order: two sets are equal when they hold the same
/// elements.
///
/// # Time Complexity
///
/// | Operation  | Complexity |
/// |------------|------------|
/// | `clone`    | O(1)       |
/// | `contains` | O(1)       |
/// | `rank_of`  | O(1)       |
/// | `get`      | O(1)       |
///
/// # Examples
///
/// ```rust
/// use setwise::immutables::ImmutableSet;
///
/// let set = ImmutableSet::copy_of(["x", "y", "x", "z"]);
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.rank_of(&"z"), Some(2));
/// assert_eq!(set, ImmutableSet::copy_of(["z", "y", "x"]));
/// ```
pub struct ImmutableSet<E> {
    storage: ReferenceCounter<SetStorage<E>>,
}

impl<E> ImmutableSet<E> {
    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.elements.len()
    }

    /// Returns `true` if the set has no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.elements.is_empty()
    }

    /// Returns the element of the given rank.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` unless `rank < len()`.
    pub fn get(&self, rank: usize) -> Result<&E> {
        check_element_index(rank, self.len()).map(|rank| &self.storage.elements[rank])
    }

    /// Returns the elements in rank order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[E] {
        &self.storage.elements
    }

    /// Returns an iterator over the elements in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.storage.elements.iter()
    }
}

impl<E: Clone + Hash + Eq> ImmutableSet<E> {
    /// Creates an empty set.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_distinct(Vec::new(), index_hash_map_with_capacity(0))
    }

    /// Creates a set of the given elements, dropping repeats.
    #[must_use]
    pub fn of<const N: usize>(elements: [E; N]) -> Self {
        Self::copy_of(elements)
    }

    /// Creates a set of `elements`, keeping the first occurrence of each.
    #[must_use]
    pub fn copy_of<I: IntoIterator<Item = E>>(elements: I) -> Self {
        let iterator = elements.into_iter();
        let mut ranks = index_hash_map_with_capacity(iterator.size_hint().0);
        let mut distinct = Vec::with_capacity(iterator.size_hint().0);
        for element in iterator {
            if !ranks.contains_key(&element) {
                ranks.insert(element.clone(), distinct.len());
                distinct.push(element);
            }
        }
        Self::from_distinct(distinct, ranks)
    }

    /// Creates a set of `elements`, which must all be distinct.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` naming the first repeated element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::immutables::ImmutableSet;
    ///
    /// assert!(ImmutableSet::try_copy_of_distinct([1, 2, 3]).is_ok());
    /// assert!(ImmutableSet::try_copy_of_distinct([1, 2, 1]).is_err());
    /// ```
    pub fn try_copy_of_distinct<I>(elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: fmt::Debug,
    {
        let iterator = elements.into_iter();
        let mut ranks = index_hash_map_with_capacity(iterator.size_hint().0);
        let mut distinct = Vec::with_capacity(iterator.size_hint().0);
        for element in iterator {
            if ranks.contains_key(&element) {
                return Err(CollectionError::invalid_argument(format!(
                    "Multiple elements with same value: {element:?}"
                )));
            }
            ranks.insert(element.clone(), distinct.len());
            distinct.push(element);
        }
        Ok(Self::from_distinct(distinct, ranks))
    }

    fn from_distinct(elements: Vec<E>, ranks: IndexHashMap<E, usize>) -> Self {
        Self {
            storage: ReferenceCounter::new(SetStorage { elements, ranks }),
        }
    }

    /// Returns `true` if the set holds `element`.
    #[inline]
    pub fn contains(&self, element: &E) -> bool {
        self.storage.ranks.contains_key(element)
    }

    /// Returns the rank of `element`, if it is a member.
    #[inline]
    pub fn rank_of(&self, element: &E) -> Option<usize> {
        self.storage.ranks.get(element).copied()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<E> Clone for ImmutableSet<E> {
    fn clone(&self) -> Self {
        Self {
            storage: ReferenceCounter::clone(&self.storage),
        }
    }
}

impl<E: Clone + Hash + Eq> Default for ImmutableSet<E> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<E: Clone + Hash + Eq> FromIterator<E> for ImmutableSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::copy_of(iter)
    }
}

impl<'a, E> IntoIterator for &'a ImmutableSet<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: Clone + Hash + Eq> PartialEq for ImmutableSet<E> {
    fn eq(&self, other: &Self) -> bool {
        if ReferenceCounter::ptr_eq(&self.storage, &other.storage) {
            return true;
        }
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl<E: Clone + Hash + Eq> Eq for ImmutableSet<E> {}

/// Order-independent: combines per-element hashes with wrapping addition.
impl<E: Clone + Hash + Eq> Hash for ImmutableSet<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let combined = self.iter().fold(0_u64, |sum, element| {
            let mut element_hasher = DefaultHasher::new();
            element.hash(&mut element_hasher);
            sum.wrapping_add(element_hasher.finish())
        });
        state.write_usize(self.len());
        state.write_u64(combined);
    }
}

impl<E: HashCode> HashCode for ImmutableSet<E> {
    fn hash_code(&self) -> i32 {
        set_hash_code(self.as_slice())
    }
}

impl<E: fmt::Debug> fmt::Debug for ImmutableSet<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<E: fmt::Display> fmt::Display for ImmutableSet<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (position, element) in self.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<E: serde::Serialize> serde::Serialize for ImmutableSet<E> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, E> serde::Deserialize<'de> for ImmutableSet<E>
where
    E: serde::Deserialize<'de> + Clone + Hash + Eq,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<E>::deserialize(deserializer).map(Self::copy_of)
    }
}

// =============================================================================
// Tests
// =============================================================================
