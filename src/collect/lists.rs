//! List views and list utilities.
//!
//! [`ListView`] is the read-only positional capability shared by the
//! immutable list, the Cartesian product, its tuples, and the lazy views
//! built here. Every view borrows its source and computes elements on
//! access.
//!
//! # Examples
//!
//! ```rust
//! use setwise::collect::lists::{self, ListView};
//!
//! let digits = [1, 2, 3, 4, 5];
//!
//! let pages = lists::partition(&digits, 2).unwrap();
//! assert_eq!(pages.len(), 3);
//! assert_eq!(pages.get(2), Ok(&[5][..]));
//!
//! let squares = lists::transform(&digits, |digit| digit * digit);
//! assert_eq!(squares.iter().collect::<Vec<_>>(), vec![1, 4, 9, 16, 25]);
//! ```

use std::fmt;
use std::iter::FusedIterator;

use super::CartesianProduct;
use crate::compare::Comparator;
use crate::error::{CollectionError, Result, check_argument, check_element_index};
use crate::immutables::ImmutableList;

// =============================================================================
// ListView Trait
// =============================================================================

/// Read-only positional access.
///
/// `Element` is what [`get`](ListView::get) hands out: a reference for
/// stored lists, a computed value for lazy views.
pub trait ListView {
    /// The element type handed out by this view.
    type Element<'a>
    where
        Self: 'a;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` unless `index < len()`.
    fn get(&self, index: usize) -> Result<Self::Element<'_>>;

    /// Returns `true` if this view has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the elements in index order.
    fn iter(&self) -> Positions<'_, Self> {
        Positions::new(self)
    }

    /// Returns the first element, if any.
    fn first(&self) -> Option<Self::Element<'_>> {
        self.get(0).ok()
    }

    /// Returns the last element, if any.
    fn last(&self) -> Option<Self::Element<'_>> {
        self.len()
            .checked_sub(1)
            .and_then(|index| self.get(index).ok())
    }
}

impl<E> ListView for ImmutableList<E> {
    type Element<'a>
        = &'a E
    where
        Self: 'a;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn get(&self, index: usize) -> Result<&E> {
        Self::get(self, index)
    }
}

// =============================================================================
// Positions Iterator
// =============================================================================

/// Iterator over a [`ListView`] by index, from both ends.
pub struct Positions<'a, L: ?Sized> {
    list: &'a L,
    front: usize,
    back: usize,
}

impl<'a, L: ListView + ?Sized> Positions<'a, L> {
    pub(crate) fn new(list: &'a L) -> Self {
        Self {
            list,
            front: 0,
            back: list.len(),
        }
    }
}

impl<'a, L: ListView + ?Sized> Iterator for Positions<'a, L> {
    type Item = L::Element<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let list: &'a L = self.list;
        let element = list.get(self.front).ok();
        self.front += 1;
        element
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

impl<L: ListView + ?Sized> DoubleEndedIterator for Positions<'_, L> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        let list = self.list;
        list.get(self.back).ok()
    }
}

impl<L: ListView + ?Sized> ExactSizeIterator for Positions<'_, L> {}

impl<L: ListView + ?Sized> FusedIterator for Positions<'_, L> {}

impl<L: ?Sized> Clone for Positions<'_, L> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            front: self.front,
            back: self.back,
        }
    }
}

// =============================================================================
// Cartesian Product
// =============================================================================

/// Returns the Cartesian product of `axes`.
///
/// See [`CartesianProduct::new`].
///
/// # Errors
///
/// Returns `InvalidArgument` if the product has more than `i32::MAX` tuples.
///
/// # Examples
///
/// ```rust
/// use setwise::collect::lists::cartesian_product;
///
/// let product = cartesian_product([vec!['a', 'b'], vec!['x', 'y']]).unwrap();
/// let words: Vec<String> = product.iter().map(|tuple| tuple.iter().collect()).collect();
/// assert_eq!(words, vec!["ax", "ay", "bx", "by"]);
/// ```
pub fn cartesian_product<E, I, A>(axes: I) -> Result<CartesianProduct<E>>
where
    I: IntoIterator<Item = A>,
    A: IntoIterator<Item = E>,
{
    CartesianProduct::new(axes)
}

// =============================================================================
// Partition
// =============================================================================

/// Consecutive sublists of a slice, each of the same size except possibly
/// the last.
pub struct Partition<'a, T> {
    elements: &'a [T],
    size: usize,
}

impl<'a, T> ListView for Partition<'a, T> {
    type Element<'b>
        = &'a [T]
    where
        Self: 'b;

    fn len(&self) -> usize {
        self.elements.len().div_ceil(self.size)
    }

    fn get(&self, index: usize) -> Result<&'a [T]> {
        let elements: &'a [T] = self.elements;
        elements
            .chunks(self.size)
            .nth(index)
            .ok_or_else(|| CollectionError::IndexOutOfRange {
                index,
                size: self.len(),
            })
    }
}

impl<T: fmt::Debug> fmt::Debug for Partition<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_list()
            .entries(self.elements.chunks(self.size))
            .finish()
    }
}

/// Divides `elements` into consecutive sublists of `size` elements.
///
/// # Errors
///
/// Returns `InvalidArgument` if `size` is zero.
pub fn partition<T>(elements: &[T], size: usize) -> Result<Partition<'_, T>> {
    check_argument(size > 0, || format!("size ({size}) must be > 0"))?;
    Ok(Partition { elements, size })
}

// =============================================================================
// Reversed
// =============================================================================

/// A slice viewed back to front.
pub struct Reversed<'a, T> {
    elements: &'a [T],
}

impl<'a, T> Reversed<'a, T> {
    /// Returns the underlying slice in its original order.
    #[must_use]
    pub const fn forward(&self) -> &'a [T] {
        self.elements
    }

    /// Reverses this view again, giving back the original slice.
    #[must_use]
    pub const fn reverse(self) -> &'a [T] {
        self.elements
    }
}

impl<'a, T> ListView for Reversed<'a, T> {
    type Element<'b>
        = &'a T
    where
        Self: 'b;

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn get(&self, index: usize) -> Result<&'a T> {
        let size = self.elements.len();
        let index = check_element_index(index, size)?;
        let elements: &'a [T] = self.elements;
        elements
            .get(size - 1 - index)
            .ok_or(CollectionError::IndexOutOfRange { index, size })
    }
}

impl<T> Clone for Reversed<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Reversed<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Reversed<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_list()
            .entries(self.elements.iter().rev())
            .finish()
    }
}

/// Returns `elements` viewed in reverse order.
#[must_use]
pub const fn reverse<T>(elements: &[T]) -> Reversed<'_, T> {
    Reversed { elements }
}

// =============================================================================
// Transformed
// =============================================================================

/// A slice whose elements are mapped through a function on every access.
///
/// The function is applied again on each `get`, so it should be cheap and
/// free of side effects.
pub struct Transformed<'a, T, F> {
    elements: &'a [T],
    function: F,
}

impl<'a, T, U, F> ListView for Transformed<'a, T, F>
where
    F: Fn(&'a T) -> U,
{
    type Element<'b>
        = U
    where
        Self: 'b;

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn get(&self, index: usize) -> Result<U> {
        let elements: &'a [T] = self.elements;
        elements
            .get(index)
            .map(&self.function)
            .ok_or_else(|| CollectionError::IndexOutOfRange {
                index,
                size: elements.len(),
            })
    }
}

impl<T, F> fmt::Debug for Transformed<'_, T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Transformed")
            .field("len", &self.elements.len())
            .finish_non_exhaustive()
    }
}

/// Returns a view applying `function` to each element of `elements`.
pub const fn transform<T, U, F>(elements: &[T], function: F) -> Transformed<'_, T, F>
where
    F: Fn(&T) -> U,
{
    Transformed { elements, function }
}

// =============================================================================
// Sorting
// =============================================================================

/// Returns the elements sorted by `comparator`. The sort is stable.
pub fn sorted_copy<T, I, C>(elements: I, comparator: &C) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    C: Comparator<T> + ?Sized,
{
    let mut sorted: Vec<T> = elements.into_iter().collect();
    sorted.sort_by(|left, right| comparator.compare(left, right));
    sorted
}
