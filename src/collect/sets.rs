//! Set capability trait and lazy set operations.
//!
//! [`SetView`] is the read-only interface shared by the standard sets,
//! [`ImmutableSet`], power-set [`Subset`](super::Subset)s and the views
//! returned by [`union`], [`intersection`], [`difference`] and
//! [`symmetric_difference`].
//!
//! The views borrow their operands and compute every answer on demand, so
//! they always reflect the current contents of the operands and cost O(1) to
//! create. Use [`SetView::copy_into`] to take a snapshot.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::{BTreeSet, HashSet};
//! use setwise::collect::sets::{self, SetView};
//!
//! let primes: HashSet<i32> = [2, 3, 5, 7].into_iter().collect();
//! let odds: HashSet<i32> = [1, 3, 5, 7, 9].into_iter().collect();
//!
//! let odd_primes = sets::intersection(&primes, &odds);
//! assert_eq!(odd_primes.len(), 3);
//! assert!(odd_primes.contains(&5));
//!
//! let mut snapshot = BTreeSet::new();
//! sets::union(&primes, &odds).copy_into(&mut snapshot);
//! assert_eq!(snapshot.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 5, 7, 9]);
//! ```

use std::collections::{BTreeSet, HashSet, btree_set, hash_set};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::Chain;

use enum_iterator::Sequence;

use super::PowerSet;
use crate::error::Result;
use crate::hash::{HashCode, set_hash_code};
use crate::immutables::ImmutableSet;

// =============================================================================
// SetView Trait
// =============================================================================

/// Read-only access to a finite set.
///
/// Implementors provide size, membership and iteration; everything else has
/// a default built on those three.
pub trait SetView {
    /// The element type.
    type Element;

    /// Iterator over references to the elements.
    type Iter<'a>: Iterator<Item = &'a Self::Element>
    where
        Self: 'a;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if `element` is a member.
    fn contains(&self, element: &Self::Element) -> bool;

    /// Returns an iterator over the elements.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns `true` if the set has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if every element of `elements` is a member.
    fn contains_all<'a, I>(&self, elements: I) -> bool
    where
        Self::Element: 'a,
        I: IntoIterator<Item = &'a Self::Element>,
    {
        elements.into_iter().all(|element| self.contains(element))
    }

    /// Returns `true` if every element of this set is in `other`.
    fn is_subset_of<S>(&self, other: &S) -> bool
    where
        S: SetView<Element = Self::Element> + ?Sized,
    {
        self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if both sets have exactly the same elements.
    fn set_equals<S>(&self, other: &S) -> bool
    where
        S: SetView<Element = Self::Element> + ?Sized,
    {
        self.len() == other.len() && self.is_subset_of(other)
    }

    /// Adds every element of this set to `target`.
    fn copy_into<C>(&self, target: &mut C)
    where
        C: Extend<Self::Element>,
        Self::Element: Clone,
    {
        target.extend(self.iter().cloned());
    }

    /// Renders the set as `{a, b, c}` in iteration order.
    fn to_display_string(&self) -> String
    where
        Self::Element: fmt::Display,
    {
        let rendered: Vec<String> = self.iter().map(ToString::to_string).collect();
        format!("{{{}}}", rendered.join(", "))
    }
}

impl<E: Hash + Eq, S: BuildHasher> SetView for HashSet<E, S> {
    type Element = E;
    type Iter<'a>
        = hash_set::Iter<'a, E>
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
}

impl<E: Ord> SetView for BTreeSet<E> {
    type Element = E;
    type Iter<'a>
        = btree_set::Iter<'a, E>
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
}

impl<E: Clone + Hash + Eq> SetView for ImmutableSet<E> {
    type Element = E;
    type Iter<'a>
        = std::slice::Iter<'a, E>
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
}

// =============================================================================
// Membership Filter
// =============================================================================

/// Iterator adapter keeping the elements whose membership in another set
/// matches a fixed answer.
pub struct Filtered<'a, I, S: ?Sized> {
    inner: I,
    other: &'a S,
    keep_members: bool,
}

impl<'a, I, S> Iterator for Filtered<'a, I, S>
where
    S: SetView + ?Sized,
    S::Element: 'a,
    I: Iterator<Item = &'a S::Element>,
{
    type Item = &'a S::Element;

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        let keep_members = self.keep_members;
        self.inner
            .find(|element| other.contains(element) == keep_members)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

const fn keep<'a, I, S: ?Sized>(inner: I, other: &'a S) -> Filtered<'a, I, S> {
    Filtered {
        inner,
        other,
        keep_members: true,
    }
}

const fn drop_members<'a, I, S: ?Sized>(inner: I, other: &'a S) -> Filtered<'a, I, S> {
    Filtered {
        inner,
        other,
        keep_members: false,
    }
}

// =============================================================================
// Views
// =============================================================================

/// Lazy union of two sets. Created by [`union`].
pub struct Union<'s, A: ?Sized, B: ?Sized> {
    left: &'s A,
    right: &'s B,
}

impl<'s, A, B> SetView for Union<'s, A, B>
where
    A: SetView + ?Sized,
    B: SetView<Element = A::Element> + ?Sized,
{
    type Element = A::Element;
    type Iter<'a>
        = Chain<A::Iter<'a>, Filtered<'a, B::Iter<'a>, A>>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.left.len() + self.right.iter().filter(|element| !self.left.contains(element)).count()
    }

    fn contains(&self, element: &Self::Element) -> bool {
        self.left.contains(element) || self.right.contains(element)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.left
            .iter()
            .chain(drop_members(self.right.iter(), self.left))
    }

    fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

/// Lazy intersection of two sets. Created by [`intersection`].
pub struct Intersection<'s, A: ?Sized, B: ?Sized> {
    left: &'s A,
    right: &'s B,
}

impl<'s, A, B> SetView for Intersection<'s, A, B>
where
    A: SetView + ?Sized,
    B: SetView<Element = A::Element> + ?Sized,
{
    type Element = A::Element;
    type Iter<'a>
        = Filtered<'a, A::Iter<'a>, B>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.iter().count()
    }

    fn contains(&self, element: &Self::Element) -> bool {
        self.left.contains(element) && self.right.contains(element)
    }

    fn iter(&self) -> Self::Iter<'_> {
        keep(self.left.iter(), self.right)
    }

    fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Lazy difference of two sets. Created by [`difference`].
pub struct Difference<'s, A: ?Sized, B: ?Sized> {
    left: &'s A,
    right: &'s B,
}

impl<'s, A, B> SetView for Difference<'s, A, B>
where
    A: SetView + ?Sized,
    B: SetView<Element = A::Element> + ?Sized,
{
    type Element = A::Element;
    type Iter<'a>
        = Filtered<'a, A::Iter<'a>, B>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.iter().count()
    }

    fn contains(&self, element: &Self::Element) -> bool {
        self.left.contains(element) && !self.right.contains(element)
    }

    fn iter(&self) -> Self::Iter<'_> {
        drop_members(self.left.iter(), self.right)
    }

    fn is_empty(&self) -> bool {
        self.right.contains_all(self.left.iter())
    }
}

/// Lazy symmetric difference of two sets. Created by
/// [`symmetric_difference`].
pub struct SymmetricDifference<'s, A: ?Sized, B: ?Sized> {
    left: &'s A,
    right: &'s B,
}

impl<'s, A, B> SetView for SymmetricDifference<'s, A, B>
where
    A: SetView + ?Sized,
    B: SetView<Element = A::Element> + ?Sized,
{
    type Element = A::Element;
    type Iter<'a>
        = Chain<Filtered<'a, A::Iter<'a>, B>, Filtered<'a, B::Iter<'a>, A>>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.iter().count()
    }

    fn contains(&self, element: &Self::Element) -> bool {
        self.left.contains(element) ^ self.right.contains(element)
    }

    fn iter(&self) -> Self::Iter<'_> {
        drop_members(self.left.iter(), self.right)
            .chain(drop_members(self.right.iter(), self.left))
    }

    fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

macro_rules! impl_view_traits {
    ($($view:ident),*) => {
        $(
            impl<'s, A, B> HashCode for $view<'s, A, B>
            where
                A: SetView + ?Sized,
                B: SetView<Element = A::Element> + ?Sized,
                A::Element: HashCode,
            {
                fn hash_code(&self) -> i32 {
                    set_hash_code(self.iter())
                }
            }

            impl<'s, A, B> fmt::Debug for $view<'s, A, B>
            where
                A: SetView + ?Sized,
                B: SetView<Element = A::Element> + ?Sized,
                A::Element: fmt::Debug,
            {
                fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    formatter.debug_set().entries(self.iter()).finish()
                }
            }

            impl<'s, A, B> fmt::Display for $view<'s, A, B>
            where
                A: SetView + ?Sized,
                B: SetView<Element = A::Element> + ?Sized,
                A::Element: fmt::Display,
            {
                fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    formatter.write_str(&self.to_display_string())
                }
            }

            impl<A: ?Sized, B: ?Sized> Clone for $view<'_, A, B> {
                fn clone(&self) -> Self {
                    *self
                }
            }

            impl<A: ?Sized, B: ?Sized> Copy for $view<'_, A, B> {}
        )*
    };
}

impl_view_traits!(Union, Intersection, Difference, SymmetricDifference);

// =============================================================================
// Constructors
// =============================================================================

/// Returns a view of the elements in either set.
///
/// Iteration yields the elements of `left`, then the elements of `right`
/// that are not in `left`.
pub const fn union<'s, A, B>(left: &'s A, right: &'s B) -> Union<'s, A, B>
where
    A: SetView + ?Sized,
    B: SetView<Element = A::Element> + ?Sized,
{
    Union { left, right }
}

/// Returns a view of the elements in both sets, in the iteration order of
/// `left`.
pub const fn intersection<'s, A, B>(left: &'s A, right: &'s B) -> Intersection<'s, A, B>
where
    A: SetView + ?Sized,
    B: SetView<Element = A::Element> + ?Sized,
{
    Intersection { left, right }
}

/// Returns a view of the elements of `left` that are not in `right`.
pub const fn difference<'s, A, B>(left: &'s A, right: &'s B) -> Difference<'s, A, B>
where
    A: SetView + ?Sized,
    B: SetView<Element = A::Element> + ?Sized,
{
    Difference { left, right }
}

/// Returns a view of the elements in exactly one of the two sets.
///
/// Iteration yields the elements of `left` not in `right`, then the
/// elements of `right` not in `left`.
pub const fn symmetric_difference<'s, A, B>(
    left: &'s A,
    right: &'s B,
) -> SymmetricDifference<'s, A, B>
where
    A: SetView + ?Sized,
    B: SetView<Element = A::Element> + ?Sized,
{
    SymmetricDifference { left, right }
}

/// Returns the set of all subsets of `elements`.
///
/// # Errors
///
/// Returns `InvalidArgument` if `elements` contains a duplicate or more than
/// [`MAX_POWER_SET_UNIVERSE`](super::MAX_POWER_SET_UNIVERSE) elements.
///
/// # Examples
///
/// ```rust
/// use setwise::collect::sets::power_set;
///
/// let subsets = power_set(['a', 'b']).unwrap();
/// assert_eq!(subsets.len(), 4);
/// ```
pub fn power_set<E, I>(elements: I) -> Result<PowerSet<E>>
where
    E: Clone + Hash + Eq + fmt::Debug,
    I: IntoIterator<Item = E>,
{
    PowerSet::new(elements)
}

/// Returns every value of the enum `E` that is not in `elements`, in
/// declaration order.
///
/// # Examples
///
/// ```rust
/// use enum_iterator::Sequence;
/// use setwise::collect::sets::complement_of;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
/// enum Weekday { Mon, Tue, Wed, Thu, Fri }
///
/// let rest = complement_of([Weekday::Tue, Weekday::Thu]);
/// assert_eq!(
///     rest.iter().copied().collect::<Vec<_>>(),
///     vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]
/// );
/// ```
pub fn complement_of<E, I>(elements: I) -> ImmutableSet<E>
where
    E: Sequence + Clone + Hash + Eq,
    I: IntoIterator<Item = E>,
{
    let excluded: HashSet<E> = elements.into_iter().collect();
    ImmutableSet::copy_of(enum_iterator::all::<E>().filter(|value| !excluded.contains(value)))
}
