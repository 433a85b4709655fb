//! Indexed element tables.
//!
//! An [`IndexTable`] assigns each distinct element a rank `0..n` in the order
//! the elements were supplied. The power set uses it to translate between
//! elements and bit positions.

use std::fmt;
use std::hash::Hash;

use crate::error::Result;
use crate::immutables::{ImmutableMap, ImmutableSet};

/// An ordered, duplicate-free table mapping elements to dense ranks.
///
/// Cloning is O(1); clones share the table.
///
/// # Examples
///
/// ```rust
/// use setwise::collect::IndexTable;
///
/// let table = IndexTable::try_new(["x", "y", "z"]).unwrap();
/// assert_eq!(table.rank_of(&"y"), Some(1));
/// assert_eq!(table.get(2), Ok(&"z"));
/// assert!(IndexTable::try_new(["x", "x"]).is_err());
/// ```
pub struct IndexTable<E> {
    elements: ImmutableSet<E>,
}

impl<E: Clone + Hash + Eq> IndexTable<E> {
    /// Builds a table ranking `elements` in iteration order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if an element occurs more than once.
    pub fn try_new<I>(elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: fmt::Debug,
    {
        ImmutableSet::try_copy_of_distinct(elements).map(|elements| Self { elements })
    }

    /// Returns the rank of `element`, if it is in the table.
    #[inline]
    pub fn rank_of(&self, element: &E) -> Option<usize> {
        self.elements.rank_of(element)
    }

    /// Returns `true` if `element` is in the table.
    #[inline]
    pub fn contains(&self, element: &E) -> bool {
        self.elements.contains(element)
    }

    /// Returns the table as an element-to-rank map.
    #[must_use]
    pub fn to_map(&self) -> ImmutableMap<E, usize> {
        ImmutableMap::from_distinct_entries(
            self.elements
                .iter()
                .cloned()
                .enumerate()
                .map(|(rank, element)| (element, rank))
                .collect(),
        )
    }
}

impl<E> IndexTable<E> {
    /// Returns the number of ranked elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the table is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element of the given rank.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` unless `rank < len()`.
    #[inline]
    pub fn get(&self, rank: usize) -> Result<&E> {
        self.elements.get(rank)
    }

    /// Returns the elements in rank order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[E] {
        self.elements.as_slice()
    }

    /// Returns the ranked elements as a set.
    #[inline]
    #[must_use]
    pub const fn elements(&self) -> &ImmutableSet<E> {
        &self.elements
    }
}

impl<E> Clone for IndexTable<E> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for IndexTable<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_map()
            .entries(self.as_slice().iter().enumerate().map(|(rank, element)| (element, rank)))
            .finish()
    }
}

/// Maps each element to its position in `elements`.
///
/// # Errors
///
/// Returns `InvalidArgument` ("Multiple elements with same value: ...") if an
/// element occurs more than once.
///
/// # Examples
///
/// ```rust
/// use setwise::collect::index::index_map;
///
/// let positions = index_map(["a", "b", "c"]).unwrap();
/// assert_eq!(positions.get("c"), Some(&2));
/// ```
pub fn index_map<E, I>(elements: I) -> Result<ImmutableMap<E, usize>>
where
    E: Clone + Hash + Eq + fmt::Debug,
    I: IntoIterator<Item = E>,
{
    IndexTable::try_new(elements).map(|table| table.to_map())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CollectionError;
    use rstest::rstest;

    #[rstest]
    fn test_ranks_are_dense_in_input_order() {
        let table = IndexTable::try_new([30, 10, 20]).unwrap();
        assert_eq!(table.len(), 3);
        for (rank, element) in table.as_slice().iter().enumerate() {
            assert_eq!(table.rank_of(element), Some(rank));
        }
        assert_eq!(table.rank_of(&10), Some(1));
        assert_eq!(table.rank_of(&40), None);
    }

    #[rstest]
    fn test_duplicates_are_rejected() {
        assert_eq!(
            IndexTable::try_new(['a', 'b', 'a']).unwrap_err(),
            CollectionError::invalid_argument("Multiple elements with same value: 'a'")
        );
    }

    #[rstest]
    fn test_empty_table() {
        let table = IndexTable::<i32>::try_new([]).unwrap();
        assert!(table.is_empty());
        assert!(table.get(0).is_err());
    }

    #[rstest]
    fn test_index_map() {
        let map = index_map(["x", "y"]).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("x"), Some(&0));
        assert_eq!(map.get("y"), Some(&1));
        assert!(index_map(["x", "x"]).is_err());
    }

    #[rstest]
    fn test_debug_shows_ranks() {
        let table = IndexTable::try_new(["p", "q"]).unwrap();
        assert_eq!(format!("{table:?}"), r#"{"p": 0, "q": 1}"#);
    }
}
