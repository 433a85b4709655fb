//! Lazy n-ary Cartesian product.
//!
//! A [`CartesianProduct`] over axes `A_0 .. A_{k-1}` presents every tuple
//! `(a_0, .., a_{k-1})` with `a_i` drawn from `A_i`, in odometer order: the
//! last axis varies fastest. Only the axes and a table of `k + 1` divisors
//! are stored; each [`Tuple`] decodes its elements from its index on access.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use smallvec::SmallVec;

use super::lists::{ListView, Positions};
use crate::error::{CollectionError, MAX_VIEW_SIZE, Result, check_element_index, checked_multiply};
use crate::hash::{HashCode, list_hash_code};
use crate::immutables::ImmutableList;

/// Largest number of tuples a [`CartesianProduct`] may have.
pub const MAX_PRODUCT_SIZE: usize = MAX_VIEW_SIZE;

// =============================================================================
// CartesianProduct
// =============================================================================

/// The Cartesian product of a sequence of lists.
///
/// For axes of sizes `s_0 .. s_{k-1}` the product has `s_0 * .. * s_{k-1}`
/// tuples. Tuple `i` holds, at axis `a`, the element
/// `axis[a][(i / P[a + 1]) % s_a]`, where `P[a] = s_a * .. * s_{k-1}` and
/// `P[k] = 1`.
///
/// Any empty axis makes the whole product empty. A product of zero axes has
/// exactly one tuple, the empty one.
///
/// # Time Complexity
///
/// | Operation         | Complexity |
/// |-------------------|------------|
/// | `new`             | O(k + m)   |
/// | `len`             | O(1)       |
/// | `get`             | O(1)       |
/// | `Tuple::get`      | O(1)       |
/// | `contains`        | O(m)       |
///
/// where `m` is the total number of axis elements.
///
/// # Examples
///
/// ```rust
/// use setwise::collect::CartesianProduct;
///
/// let product = CartesianProduct::new([vec![1, 2], vec![10, 20, 30]]).unwrap();
/// assert_eq!(product.len(), 6);
///
/// let tuples: Vec<Vec<i32>> = product.iter().map(|tuple| tuple.to_vec()).collect();
/// assert_eq!(tuples[0], vec![1, 10]);
/// assert_eq!(tuples[1], vec![1, 20]);
/// assert_eq!(tuples[5], vec![2, 30]);
///
/// assert!(product.contains(&[2, 20]));
/// assert!(!product.contains(&[20, 2]));
/// ```
pub struct CartesianProduct<E> {
    axes: Vec<ImmutableList<E>>,
    // P[0..=k]; empty when some axis is empty
    divisors: SmallVec<[usize; 8]>,
}

impl<E> CartesianProduct<E> {
    /// Creates the product of `axes`, copying each axis in order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the product has more than
    /// [`MAX_PRODUCT_SIZE`] tuples.
    pub fn new<I, A>(axes: I) -> Result<Self>
    where
        I: IntoIterator<Item = A>,
        A: IntoIterator<Item = E>,
    {
        Self::from_axes(axes.into_iter().map(ImmutableList::copy_of).collect())
    }

    /// Creates the product of axes that may be absent or hold absent
    /// elements.
    ///
    /// Every axis and element is checked before anything is built.
    ///
    /// # Errors
    ///
    /// Returns `NullElement` naming the first absent axis (`axis 1`) or
    /// element (`axis 1, index 0`), or `InvalidArgument` if the product is
    /// too large.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::collect::CartesianProduct;
    /// use setwise::error::CollectionError;
    ///
    /// let complete = CartesianProduct::try_from_optional([Some(vec![Some(1)]), Some(vec![Some(2)])]);
    /// assert_eq!(complete.unwrap().len(), 1);
    ///
    /// let missing = CartesianProduct::try_from_optional([Some(vec![Some(1)]), Some(vec![None])]);
    /// assert_eq!(missing.unwrap_err(), CollectionError::null_element("axis 1, index 0"));
    /// ```
    pub fn try_from_optional<I, A>(axes: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<A>>,
        A: IntoIterator<Item = Option<E>>,
    {
        let axes = axes
            .into_iter()
            .enumerate()
            .map(|(axis_index, axis)| {
                let axis = axis.ok_or_else(|| {
                    CollectionError::null_element(format!("axis {axis_index}"))
                })?;
                ImmutableList::try_copy_of_options(axis).map_err(|error| match error {
                    CollectionError::NullElement { location } => {
                        CollectionError::null_element(format!("axis {axis_index}, {location}"))
                    }
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()
            .inspect_err(|error| {
                tracing::debug!(%error, "rejected cartesian product with absent input");
            })?;
        Self::from_axes(axes)
    }

    fn from_axes(axes: Vec<ImmutableList<E>>) -> Result<Self> {
        let axis_count = axes.len();
        if axes.iter().any(ImmutableList::is_empty) {
            tracing::debug!(axis_count, tuple_count = 0, "created cartesian product");
            return Ok(Self {
                axes,
                divisors: SmallVec::new(),
            });
        }

        let mut divisors: SmallVec<[usize; 8]> = SmallVec::with_capacity(axis_count + 1);
        let mut running = 1_usize;
        divisors.push(running);
        for axis in axes.iter().rev() {
            running = checked_multiply(running, axis.len()).map_err(|_| {
                tracing::debug!(axis_count, "rejected oversized cartesian product");
                CollectionError::invalid_argument(format!(
                    "Cartesian product too large; must have size at most {MAX_PRODUCT_SIZE}"
                ))
            })?;
            divisors.push(running);
        }
        divisors.reverse();

        tracing::debug!(axis_count, tuple_count = running, "created cartesian product");
        Ok(Self { axes, divisors })
    }

    /// Returns the number of tuples.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.divisors.first().copied().unwrap_or(0)
    }

    /// Returns `true` if some axis is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of axes, which is the length of every tuple.
    #[inline]
    #[must_use]
    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }

    /// Returns the axes.
    #[inline]
    #[must_use]
    pub fn axes(&self) -> &[ImmutableList<E>] {
        &self.axes
    }

    /// Returns the tuple at `index`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` unless `index < len()`.
    pub fn get(&self, index: usize) -> Result<Tuple<'_, E>> {
        check_element_index(index, self.len()).map(|index| Tuple {
            product: self,
            index,
        })
    }

    /// Returns an iterator over the tuples in index order.
    #[must_use]
    pub fn iter(&self) -> Positions<'_, Self> {
        Positions::new(self)
    }

    fn element(&self, index: usize, axis: usize) -> Option<&E> {
        let values = self.axes.get(axis)?;
        let divisor = self.divisors.get(axis + 1)?;
        let position = (index / divisor).checked_rem(values.len())?;
        values.as_slice().get(position)
    }
}

impl<E: PartialEq> CartesianProduct<E> {
    /// Returns `true` if `candidate` is one of the tuples: it has one
    /// element per axis and each element occurs in its axis.
    pub fn contains(&self, candidate: &[E]) -> bool {
        !self.is_empty()
            && candidate.len() == self.axes.len()
            && self
                .axes
                .iter()
                .zip(candidate)
                .all(|(axis, element)| axis.contains(element))
    }
}

impl<E> ListView for CartesianProduct<E> {
    type Element<'a>
        = Tuple<'a, E>
    where
        Self: 'a;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn get(&self, index: usize) -> Result<Tuple<'_, E>> {
        Self::get(self, index)
    }
}

impl<E> Clone for CartesianProduct<E> {
    fn clone(&self) -> Self {
        Self {
            axes: self.axes.clone(),
            divisors: self.divisors.clone(),
        }
    }
}

impl<'a, E> IntoIterator for &'a CartesianProduct<E> {
    type Item = Tuple<'a, E>;
    type IntoIter = Positions<'a, CartesianProduct<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Products are equal when they hold the same tuples in the same order.
impl<E: PartialEq> PartialEq for CartesianProduct<E> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        // Repeated axis values let different axes spell the same tuples.
        self.is_empty() || self.axes == other.axes || self.iter().eq(other.iter())
    }
}

impl<E: Eq> Eq for CartesianProduct<E> {}

impl<E: HashCode> HashCode for CartesianProduct<E> {
    fn hash_code(&self) -> i32 {
        self.iter().fold(1_i32, |hash, tuple| {
            hash.wrapping_mul(31).wrapping_add(tuple.hash_code())
        })
    }
}

impl<E: fmt::Debug> fmt::Debug for CartesianProduct<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CartesianProduct")
            .field("axes", &self.axes)
            .field("len", &self.len())
            .finish()
    }
}

impl<E: fmt::Display> fmt::Display for CartesianProduct<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (position, tuple) in self.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{tuple}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Tuple
// =============================================================================

/// One tuple of a [`CartesianProduct`].
///
/// A tuple is its index plus a borrow of the product; each element is
/// decoded from the index when accessed.
pub struct Tuple<'a, E> {
    product: &'a CartesianProduct<E>,
    index: usize,
}

impl<'a, E> Tuple<'a, E> {
    /// Returns the index of this tuple in its product.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the number of elements, one per axis.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.product.axis_count()
    }

    /// Returns `true` for the single tuple of a product of zero axes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element drawn from `axis`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` unless `axis < len()`.
    pub fn get(&self, axis: usize) -> Result<&'a E> {
        let size = self.len();
        let axis = check_element_index(axis, size)?;
        self.product
            .element(self.index, axis)
            .ok_or(CollectionError::IndexOutOfRange { index: axis, size })
    }

    /// Returns an iterator over the elements in axis order.
    #[must_use]
    pub fn iter(&self) -> TupleElements<'a, E> {
        TupleElements {
            tuple: *self,
            front: 0,
            back: self.len(),
        }
    }
}

impl<E: Clone> Tuple<'_, E> {
    /// Copies the elements into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<E> {
        self.iter().cloned().collect()
    }
}

impl<'a, E> ListView for Tuple<'a, E> {
    type Element<'b>
        = &'a E
    where
        Self: 'b;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn get(&self, index: usize) -> Result<&'a E> {
        Self::get(self, index)
    }
}

impl<E> Clone for Tuple<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Tuple<'_, E> {}

impl<'a, E> IntoIterator for Tuple<'a, E> {
    type Item = &'a E;
    type IntoIter = TupleElements<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, E> IntoIterator for &Tuple<'a, E> {
    type Item = &'a E;
    type IntoIter = TupleElements<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'b, E: PartialEq> PartialEq<Tuple<'b, E>> for Tuple<'_, E> {
    fn eq(&self, other: &Tuple<'b, E>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<E: Eq> Eq for Tuple<'_, E> {}

impl<E: PartialEq> PartialEq<[E]> for Tuple<'_, E> {
    fn eq(&self, other: &[E]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<E: PartialEq> PartialEq<Vec<E>> for Tuple<'_, E> {
    fn eq(&self, other: &Vec<E>) -> bool {
        *self == *other.as_slice()
    }
}

impl<E: PartialEq, const N: usize> PartialEq<[E; N]> for Tuple<'_, E> {
    fn eq(&self, other: &[E; N]) -> bool {
        *self == other[..]
    }
}

/// Hashes like a slice of the same elements.
impl<E: Hash> Hash for Tuple<'_, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for element in self.iter() {
            element.hash(state);
        }
    }
}

impl<E: HashCode> HashCode for Tuple<'_, E> {
    fn hash_code(&self) -> i32 {
        list_hash_code(self.iter())
    }
}

impl<E: fmt::Debug> fmt::Debug for Tuple<'_, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<E: fmt::Display> fmt::Display for Tuple<'_, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (position, element) in self.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

/// Iterator over the elements of a [`Tuple`] in axis order.
pub struct TupleElements<'a, E> {
    tuple: Tuple<'a, E>,
    front: usize,
    back: usize,
}

impl<'a, E> Iterator for TupleElements<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let element = self.tuple.get(self.front).ok();
        self.front += 1;
        element
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<E> DoubleEndedIterator for TupleElements<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.tuple.get(self.back).ok()
    }
}

impl<E> ExactSizeIterator for TupleElements<'_, E> {}

impl<E> FusedIterator for TupleElements<'_, E> {}

impl<E> Clone for TupleElements<'_, E> {
    fn clone(&self) -> Self {
        Self {
            tuple: self.tuple,
            front: self.front,
            back: self.back,
        }
    }
}

// Thread safety follows the reference counter: `Rc` by default, `Arc` with the
// `arc` feature.
#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(CartesianProduct<i32>: Send, Sync);
#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(CartesianProduct<String>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(CartesianProduct<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(CartesianProduct<String>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
