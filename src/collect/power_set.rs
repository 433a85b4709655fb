//! Lazy power set.
//!
//! A [`PowerSet`] over a universe of `n` elements presents all `2^n`
//! subsets while storing only the universe. Subset `m` contains the element
//! of rank `i` exactly when bit `i` of `m` is set, so each [`Subset`] is a
//! mask plus a shared handle to the universe.

use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};
use std::iter::FusedIterator;

use super::IndexTable;
use super::sets::SetView;
use crate::error::{CollectionError, Result, check_element_index};
use crate::hash::{HashCode, set_hash_code};
use crate::immutables::ImmutableSet;

/// Largest universe a [`PowerSet`] accepts.
pub const MAX_POWER_SET_UNIVERSE: usize = 30;

// =============================================================================
// PowerSet
// =============================================================================

/// The set of all subsets of a universe of at most
/// [`MAX_POWER_SET_UNIVERSE`] elements.
///
/// Subsets are enumerated in ascending mask order: the empty set first, the
/// full universe last. Memory use is O(n) regardless of the `2^n` logical
/// size.
///
/// Two power sets are equal when their universes contain the same elements,
/// whatever order those elements were supplied in.
///
/// # Time Complexity
///
/// | Operation          | Complexity |
/// |--------------------|------------|
/// | `new`              | O(n)       |
/// | `len`              | O(1)       |
/// | `get`              | O(1)       |
/// | `contains`         | O(k)       |
/// | `hash_code`        | O(n)       |
/// | full iteration     | O(2^n)     |
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use setwise::collect::{PowerSet, SetView};
///
/// let power_set = PowerSet::new(["a", "b", "c"]).unwrap();
/// assert_eq!(power_set.len(), 8);
///
/// let sizes: Vec<usize> = power_set.iter().map(|subset| subset.len()).collect();
/// assert_eq!(sizes, vec![0, 1, 1, 2, 1, 2, 2, 3]);
///
/// let candidate: HashSet<&str> = ["a", "c"].into_iter().collect();
/// assert!(power_set.contains(&candidate));
/// ```
pub struct PowerSet<E> {
    table: IndexTable<E>,
}

impl<E: Clone + Hash + Eq> PowerSet<E> {
    /// Creates the power set of `elements`.
    ///
    /// The iteration order of `elements` fixes the rank, and so the bit
    /// position, of each element.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `elements` has more than
    /// [`MAX_POWER_SET_UNIVERSE`] elements or contains a duplicate.
    pub fn new<I>(elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: fmt::Debug,
    {
        let elements: Vec<E> = elements.into_iter().collect();
        if elements.len() > MAX_POWER_SET_UNIVERSE {
            tracing::debug!(
                universe_size = elements.len(),
                "rejected power set over oversized universe"
            );
            return Err(CollectionError::invalid_argument(format!(
                "Too many elements to create power set: {} > {MAX_POWER_SET_UNIVERSE}",
                elements.len()
            )));
        }
        let table = IndexTable::try_new(elements).inspect_err(|error| {
            tracing::debug!(%error, "rejected power set over universe with duplicates");
        })?;
        tracing::debug!(universe_size = table.len(), "created power set");
        Ok(Self { table })
    }

    /// Returns `true` if every element of `candidate` is in the universe,
    /// that is, if `candidate` is one of the subsets.
    pub fn contains<S>(&self, candidate: &S) -> bool
    where
        S: SetView<Element = E> + ?Sized,
    {
        candidate.len() <= self.table.len()
            && candidate.iter().all(|element| self.table.contains(element))
    }

    /// Returns `true` if the distinct elements of `candidate` form one of
    /// the subsets.
    pub fn contains_all_of<'a, I>(&self, candidate: I) -> bool
    where
        E: 'a,
        I: IntoIterator<Item = &'a E>,
    {
        candidate
            .into_iter()
            .all(|element| self.table.contains(element))
    }

    /// Returns `true` if `candidates` holds exactly the subsets of this power
    /// set, as when every enumerated subset has been copied into a set of
    /// sets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::{BTreeSet, HashSet};
    /// use setwise::collect::PowerSet;
    ///
    /// let power_set = PowerSet::new([1, 2]).unwrap();
    /// let copied: HashSet<BTreeSet<i32>> = power_set
    ///     .iter()
    ///     .map(|subset| subset.iter().copied().collect())
    ///     .collect();
    /// assert!(power_set.set_equals(&copied));
    /// ```
    pub fn set_equals<C>(&self, candidates: &C) -> bool
    where
        C: SetView + ?Sized,
        C::Element: SetView<Element = E>,
    {
        candidates.len() == self.len()
            && candidates
                .iter()
                .all(|candidate| self.contains(candidate))
    }
}

impl<E> PowerSet<E> {
    /// Returns the number of subsets, `2^n`.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        1 << self.table.len()
    }

    /// Always `false`: every power set contains at least the empty set.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns the number of elements in the universe.
    #[inline]
    #[must_use]
    pub fn universe_size(&self) -> usize {
        self.table.len()
    }

    /// Returns the universe in rank order.
    #[inline]
    #[must_use]
    pub const fn universe(&self) -> &ImmutableSet<E> {
        self.table.elements()
    }

    /// Returns the subset identified by `mask`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` unless `mask < len()`.
    pub fn get(&self, mask: usize) -> Result<Subset<E>> {
        check_element_index(mask, self.len()).map(|mask| Subset {
            table: self.table.clone(),
            mask,
        })
    }

    /// Returns an iterator over all subsets in ascending mask order.
    #[must_use]
    pub fn iter(&self) -> Subsets<E> {
        Subsets {
            table: self.table.clone(),
            front: 0,
            back: self.len(),
        }
    }
}

impl<E> Clone for PowerSet<E> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }
}

impl<E> IntoIterator for &PowerSet<E> {
    type Item = Subset<E>;
    type IntoIter = Subsets<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: Clone + Hash + Eq> PartialEq for PowerSet<E> {
    fn eq(&self, other: &Self) -> bool {
        self.universe() == other.universe()
    }
}

impl<E: Clone + Hash + Eq> Eq for PowerSet<E> {}

impl<E, S> PartialEq<HashSet<BTreeSet<E>, S>> for PowerSet<E>
where
    E: Clone + Hash + Ord,
    S: BuildHasher,
{
    fn eq(&self, other: &HashSet<BTreeSet<E>, S>) -> bool {
        self.set_equals(other)
    }
}

impl<E: Clone + Hash + Eq> Hash for PowerSet<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.universe().hash(state);
    }
}

/// Each element lies in exactly half of the `2^n` subsets, so the sum of all
/// subset hash codes is the universe hash code times `2^(n-1)`.
impl<E: HashCode> HashCode for PowerSet<E> {
    fn hash_code(&self) -> i32 {
        let universe_size = self.table.len();
        if universe_size == 0 {
            return 0;
        }
        let shift = u32::try_from(universe_size - 1).unwrap_or(u32::MAX);
        set_hash_code(self.table.as_slice()).wrapping_shl(shift)
    }
}

impl<E: fmt::Debug> fmt::Debug for PowerSet<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PowerSet")
            .field("universe", &self.table)
            .finish()
    }
}

impl<E: fmt::Display> fmt::Display for PowerSet<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "power_set({})", self.universe())
    }
}

// =============================================================================
// Subsets Iterator
// =============================================================================

/// Iterator over the subsets of a [`PowerSet`] in ascending mask order.
pub struct Subsets<E> {
    table: IndexTable<E>,
    front: usize,
    back: usize,
}

impl<E> Iterator for Subsets<E> {
    type Item = Subset<E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let mask = self.front;
        self.front += 1;
        Some(Subset {
            table: self.table.clone(),
            mask,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<E> DoubleEndedIterator for Subsets<E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(Subset {
            table: self.table.clone(),
            mask: self.back,
        })
    }
}

impl<E> ExactSizeIterator for Subsets<E> {}

impl<E> FusedIterator for Subsets<E> {}

// =============================================================================
// Subset
// =============================================================================

/// One subset of a [`PowerSet`]'s universe.
///
/// A subset holds its mask and a shared handle to the universe; membership,
/// size and iteration are all derived from the mask. Elements iterate in
/// rank order.
///
/// Equality and hashing follow set semantics, so a subset compares equal to
/// a subset of a different power set with the same elements.
///
/// # Examples
///
/// ```rust
/// use setwise::collect::PowerSet;
///
/// let power_set = PowerSet::new([10, 20, 30]).unwrap();
/// let subset = power_set.get(0b101).unwrap();
///
/// assert_eq!(subset.len(), 2);
/// assert!(subset.contains(&30));
/// assert!(!subset.contains(&20));
/// assert_eq!(subset.iter().copied().collect::<Vec<_>>(), vec![10, 30]);
/// ```
pub struct Subset<E> {
    table: IndexTable<E>,
    mask: usize,
}

impl<E> Subset<E> {
    /// Returns the mask identifying this subset.
    #[inline]
    #[must_use]
    pub const fn mask(&self) -> usize {
        self.mask
    }

    /// Returns the number of elements, the population count of the mask.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Returns `true` for the empty subset.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Returns an iterator over the elements in rank order.
    #[must_use]
    pub fn iter(&self) -> SubsetIter<'_, E> {
        SubsetIter {
            universe: self.table.as_slice(),
            remaining: self.mask,
        }
    }
}

impl<E: Clone + Hash + Eq> Subset<E> {
    /// Returns `true` if `element` is in this subset.
    pub fn contains(&self, element: &E) -> bool {
        self.table
            .rank_of(element)
            .is_some_and(|rank| (self.mask >> rank) & 1 == 1)
    }
}

impl<E: Clone + Hash + Eq> SetView for Subset<E> {
    type Element = E;
    type Iter<'a>
        = SubsetIter<'a, E>
    where
        Self: 'a;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn contains(&self, element: &E) -> bool {
        Self::contains(self, element)
    }

    fn iter(&self) -> Self::Iter<'_> {
        Self::iter(self)
    }

    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}

impl<E> Clone for Subset<E> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
            mask: self.mask,
        }
    }
}

impl<'a, E> IntoIterator for &'a Subset<E> {
    type Item = &'a E;
    type IntoIter = SubsetIter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: Clone + Hash + Eq> PartialEq for Subset<E> {
    fn eq(&self, other: &Self) -> bool {
        self.set_equals(other)
    }
}

impl<E: Clone + Hash + Eq> Eq for Subset<E> {}

impl<E: Hash> Hash for Subset<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Rank order differs between universes, so the combination must commute.
        let combined = self.iter().fold(0_u64, |sum, element| {
            let mut element_hasher = DefaultHasher::new();
            element.hash(&mut element_hasher);
            sum.wrapping_add(element_hasher.finish())
        });
        state.write_usize(self.len());
        state.write_u64(combined);
    }
}

impl<E: HashCode> HashCode for Subset<E> {
    fn hash_code(&self) -> i32 {
        set_hash_code(self.iter())
    }
}

impl<E: fmt::Debug> fmt::Debug for Subset<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<E: fmt::Display> fmt::Display for Subset<E> {
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

/// Iterator over the elements of a [`Subset`].
///
/// Walks the set bits of the mask from least to most significant.
pub struct SubsetIter<'a, E> {
    universe: &'a [E],
    remaining: usize,
}

impl<'a, E> Iterator for SubsetIter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let rank = self.remaining.trailing_zeros() as usize;
        self.remaining &= self.remaining - 1;
        self.universe.get(rank)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl<E> DoubleEndedIterator for SubsetIter<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let rank = (usize::BITS - 1 - self.remaining.leading_zeros()) as usize;
        self.remaining &= !(1 << rank);
        self.universe.get(rank)
    }
}

impl<E> ExactSizeIterator for SubsetIter<'_, E> {}

impl<E> FusedIterator for SubsetIter<'_, E> {}

impl<E> Clone for SubsetIter<'_, E> {
    fn clone(&self) -> Self {
        Self {
            universe: self.universe,
            remaining: self.remaining,
        }
    }
}

// Thread safety follows the reference counter: `Rc` by default, `Arc` with the
// `arc` feature.
#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(PowerSet<i32>: Send, Sync);
#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Subset<String>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PowerSet<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Subset<String>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::{BTreeSet, HashSet};

    #[rstest]
    #[case(0, 1)]
    #[case(1, 2)]
    #[case(3, 8)]
    #[case(10, 1024)]
    fn test_len_is_two_to_the_n(#[case] universe_size: usize, #[case] expected: usize) {
        let power_set = PowerSet::new(0..universe_size).unwrap();
        assert_eq!(power_set.len(), expected);
        assert_eq!(power_set.iter().len(), expected);
        assert!(!power_set.is_empty());
    }

    #[rstest]
    fn test_empty_universe_has_only_the_empty_subset() {
        let power_set = PowerSet::<i32>::new([]).unwrap();
        let subsets: Vec<Subset<i32>> = power_set.iter().collect();
        assert_eq!(subsets.len(), 1);
        assert!(subsets[0].is_empty());
        assert_eq!(power_set.hash_code(), 0);
    }

    #[rstest]
    fn test_iteration_follows_mask_order() {
        let power_set = PowerSet::new(['a', 'b']).unwrap();
        let subsets: Vec<Vec<char>> = power_set
            .iter()
            .map(|subset| subset.iter().copied().collect())
            .collect();
        assert_eq!(
            subsets,
            vec![vec![], vec!['a'], vec!['b'], vec!['a', 'b']]
        );
    }

    #[rstest]
    fn test_iteration_from_both_ends() {
        let power_set = PowerSet::new([1, 2, 3]).unwrap();
        let mut subsets = power_set.iter();
        assert_eq!(subsets.next_back().map(|subset| subset.mask()), Some(7));
        assert_eq!(subsets.next().map(|subset| subset.mask()), Some(0));
        assert_eq!(subsets.len(), 6);
        assert_eq!(subsets.nth(5).map(|subset| subset.mask()), Some(6));
        assert!(subsets.next().is_none());
    }

    #[rstest]
    fn test_get_out_of_range() {
        let power_set = PowerSet::new([1, 2]).unwrap();
        assert!(power_set.get(3).is_ok());
        assert_eq!(
            power_set.get(4).unwrap_err(),
            CollectionError::IndexOutOfRange { index: 4, size: 4 }
        );
    }

    #[rstest]
    fn test_too_many_elements() {
        let result = PowerSet::new(0..31);
        assert_eq!(
            result.unwrap_err(),
            CollectionError::invalid_argument("Too many elements to create power set: 31 > 30")
        );
    }

    #[rstest]
    fn test_duplicates_are_rejected() {
        assert!(matches!(
            PowerSet::new([1, 2, 1]),
            Err(CollectionError::InvalidArgument { .. })
        ));
    }

    #[rstest]
    fn test_contains_checks_universe_membership() {
        let power_set = PowerSet::new([1, 2, 3]).unwrap();
        let inside: HashSet<i32> = [1, 3].into_iter().collect();
        let outside: BTreeSet<i32> = [1, 4].into_iter().collect();
        assert!(power_set.contains(&inside));
        assert!(!power_set.contains(&outside));
        assert!(power_set.contains(&HashSet::new()));
        assert!(power_set.contains_all_of(&[2, 2, 3]));
        assert!(!power_set.contains_all_of(&[0]));
    }

    #[rstest]
    fn test_subset_membership() {
        let power_set = PowerSet::new(["x", "y", "z"]).unwrap();
        let subset = power_set.get(0b110).unwrap();
        assert_eq!(subset.len(), 2);
        assert!(!subset.contains(&"x"));
        assert!(subset.contains(&"y"));
        assert!(subset.contains(&"z"));
        assert!(!subset.contains(&"w"));
        assert_eq!(subset.iter().rev().copied().collect::<Vec<_>>(), vec!["z", "y"]);
    }

    #[rstest]
    fn test_subset_iterator_is_fused() {
        let power_set = PowerSet::new([1]).unwrap();
        let subset = power_set.get(1).unwrap();
        let mut elements = subset.iter();
        assert_eq!(elements.next(), Some(&1));
        assert_eq!(elements.next(), None);
        assert_eq!(elements.next(), None);
    }

    #[rstest]
    fn test_equality_ignores_universe_order() {
        let forward = PowerSet::new([1, 2, 3]).unwrap();
        let backward = PowerSet::new([3, 2, 1]).unwrap();
        assert_eq!(forward, backward);
        assert_ne!(forward, PowerSet::new([1, 2]).unwrap());

        let mut power_sets = HashSet::new();
        power_sets.insert(forward);
        assert!(power_sets.contains(&backward));
    }

    #[rstest]
    fn test_subset_equality_across_power_sets() {
        let first = PowerSet::new([1, 2, 3]).unwrap();
        let second = PowerSet::new([3, 1]).unwrap();
        let from_first = first.get(0b101).unwrap();
        let from_second = second.get(0b11).unwrap();
        assert_eq!(from_first, from_second);

        let mut subsets = HashSet::new();
        subsets.insert(from_first);
        assert!(subsets.contains(&from_second));
    }

    #[rstest]
    fn test_subset_hash_ignores_universe_order() {
        let hash_of = |subset: &Subset<&str>| {
            let mut hasher = DefaultHasher::new();
            subset.hash(&mut hasher);
            hasher.finish()
        };
        let forward = PowerSet::new(["a", "b", "c"]).unwrap();
        let backward = PowerSet::new(["c", "b", "a"]).unwrap();
        assert_eq!(
            hash_of(&forward.get(0b011).unwrap()),
            hash_of(&backward.get(0b110).unwrap())
        );
    }

    #[rstest]
    fn test_equals_copied_subsets() {
        let power_set = PowerSet::new([1, 2, 3]).unwrap();
        let mut copied: HashSet<BTreeSet<i32>> = power_set
            .iter()
            .map(|subset| subset.iter().copied().collect())
            .collect();
        assert!(power_set.set_equals(&copied));
        assert_eq!(power_set, copied);
        assert_eq!(power_set.hash_code(), copied.hash_code());

        copied.remove(&BTreeSet::from([1, 3]));
        copied.insert(BTreeSet::from([1, 4]));
        assert!(!power_set.set_equals(&copied));
        assert_ne!(power_set, copied);

        copied.remove(&BTreeSet::from([1, 4]));
        assert_ne!(power_set, copied);
    }

    #[rstest]
    fn test_hash_code_of_two_elements() {
        let power_set = PowerSet::new([1, 2]).unwrap();
        assert_eq!(power_set.hash_code(), 6);
    }

    #[rstest]
    fn test_hash_code_matches_sum_over_subsets() {
        let power_set = PowerSet::new(["alpha", "beta", "gamma", "delta"]).unwrap();
        let summed = power_set
            .iter()
            .fold(0_i32, |sum, subset| sum.wrapping_add(subset.hash_code()));
        assert_eq!(power_set.hash_code(), summed);
    }

    #[rstest]
    fn test_display() {
        let power_set = PowerSet::new([1, 2]).unwrap();
        assert_eq!(power_set.to_string(), "power_set({1, 2})");
        assert_eq!(power_set.get(2).unwrap().to_string(), "{2}");
    }
}
