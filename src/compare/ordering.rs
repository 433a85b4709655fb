//! Composable comparators.
//!
//! [`Comparator`] is a strategy for ordering values of a type. Unlike `Ord`,
//! a type may have any number of comparators, and comparators compose:
//!
//! ```rust
//! use setwise::compare::{natural, Comparator};
//!
//! let by_length_then_reverse_alphabetical = natural()
//!     .on_result_of(|word: &&str| word.len())
//!     .compound(natural().reverse());
//!
//! let sorted = by_length_then_reverse_alphabetical.sorted_copy(["bb", "c", "aa", "a"]);
//! assert_eq!(sorted, vec!["c", "a", "bb", "aa"]);
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::error::{CollectionError, Result};

// =============================================================================
// Comparator Trait
// =============================================================================

/// A total preorder over values of type `T`.
///
/// Implementations must be consistent: `compare(a, b)` is the reverse of
/// `compare(b, a)`, and the relation is transitive.
///
/// The provided methods build new comparators from this one. Methods that
/// consume `self` require `Self: Sized`, so `dyn Comparator<T>` remains
/// usable.
///
/// A comparator type should implement this trait for a single `T`; the
/// combinators rely on that to infer `T`.
pub trait Comparator<T: ?Sized> {
    /// Compares `left` with `right`.
    fn compare(&self, left: &T, right: &T) -> Ordering;

    /// Returns the reverse of this comparator.
    #[must_use]
    fn reverse(self) -> Reverse<Self>
    where
        Self: Sized,
    {
        Reverse { comparator: self }
    }

    /// Lifts this comparator to `Option<T>`, ordering `None` before every
    /// present value.
    #[must_use]
    fn nulls_first(self) -> NullsFirst<Self>
    where
        Self: Sized,
    {
        NullsFirst { comparator: self }
    }

    /// Lifts this comparator to `Option<T>`, ordering `None` after every
    /// present value.
    #[must_use]
    fn nulls_last(self) -> NullsLast<Self>
    where
        Self: Sized,
    {
        NullsLast { comparator: self }
    }

    /// Orders values of type `S` by applying `function` and comparing the
    /// results with this comparator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::compare::{natural, Comparator};
    ///
    /// let by_length = natural().on_result_of(|word: &String| word.len());
    /// assert!(by_length.is_ordered(&["a".to_string(), "bb".to_string()]));
    /// ```
    #[must_use]
    fn on_result_of<S, F>(self, function: F) -> OnResultOf<Self, F, T>
    where
        Self: Sized,
        T: Sized,
        F: Fn(&S) -> T,
    {
        OnResultOf {
            comparator: self,
            function,
            result: PhantomData,
        }
    }

    /// Breaks ties of this comparator with `secondary`.
    #[must_use]
    fn compound<C>(self, secondary: C) -> Compound<Self, C>
    where
        Self: Sized,
        C: Comparator<T>,
    {
        Compound {
            primary: self,
            secondary,
        }
    }

    /// Orders sequences element by element with this comparator.
    ///
    /// The first non-equal pair decides; a proper prefix orders before the
    /// longer sequence.
    #[must_use]
    fn lexicographical(self) -> Lexicographical<Self>
    where
        Self: Sized,
    {
        Lexicographical { comparator: self }
    }

    /// Returns `elements` sorted by this comparator.
    ///
    /// The sort is stable.
    fn sorted_copy<I>(&self, elements: I) -> Vec<T>
    where
        Self: Sized,
        T: Sized,
        I: IntoIterator<Item = T>,
    {
        let mut sorted: Vec<T> = elements.into_iter().collect();
        sorted.sort_by(|left, right| self.compare(left, right));
        sorted
    }

    /// Returns the lesser of two values, or `left` if they are equal.
    fn min<'a>(&self, left: &'a T, right: &'a T) -> &'a T {
        if self.compare(left, right) == Ordering::Greater {
            right
        } else {
            left
        }
    }

    /// Returns the greater of two values, or `left` if they are equal.
    fn max<'a>(&self, left: &'a T, right: &'a T) -> &'a T {
        if self.compare(left, right) == Ordering::Less {
            right
        } else {
            left
        }
    }

    /// Returns `true` if each element is less than or equal to the next.
    fn is_ordered<'a, I>(&self, elements: I) -> bool
    where
        Self: Sized,
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        is_sorted_by(elements, |ordering| ordering != Ordering::Greater, self)
    }

    /// Returns `true` if each element is strictly less than the next.
    fn is_strictly_ordered<'a, I>(&self, elements: I) -> bool
    where
        Self: Sized,
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        is_sorted_by(elements, |ordering| ordering == Ordering::Less, self)
    }
}

fn is_sorted_by<'a, T, I, C, P>(elements: I, accept: P, comparator: &C) -> bool
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
    P: Fn(Ordering) -> bool,
{
    let mut iterator = elements.into_iter();
    let Some(mut previous) = iterator.next() else {
        return true;
    };
    for current in iterator {
        if !accept(comparator.compare(previous, current)) {
            return false;
        }
        previous = current;
    }
    true
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for &C {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (**self).compare(left, right)
    }
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for Box<C> {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (**self).compare(left, right)
    }
}

// =============================================================================
// Natural Orderings
// =============================================================================

// Each comparator type implements `Comparator<T>` for exactly one `T`, so the
// stateless ones carry `T` as a marker.
macro_rules! marker_comparator {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            pub struct $name<T: ?Sized>(PhantomData<fn(&T)>);

            impl<T: ?Sized> $name<T> {
                const fn new() -> Self {
                    Self(PhantomData)
                }
            }

            impl<T: ?Sized> Clone for $name<T> {
                fn clone(&self) -> Self {
                    *self
                }
            }

            impl<T: ?Sized> Copy for $name<T> {}

            impl<T: ?Sized> Default for $name<T> {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl<T: ?Sized> fmt::Debug for $name<T> {
                fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    formatter.write_str(stringify!($name))
                }
            }
        )*
    };
}

marker_comparator!(
    /// The natural order of `Ord` types.
    Natural,
    /// The reverse of the natural order of `Ord` types.
    ReverseNatural,
    /// A comparator under which every value is equal.
    ///
    /// Sorting with it leaves the input order unchanged; it is mostly useful
    /// as a neutral element for [`compound_all`].
    AllEqual,
    /// Orders values by their `Display` rendering.
    UsingToString,
);

impl<T: ?Sized> Natural<T> {
    /// Returns the reverse natural order.
    #[must_use]
    pub const fn reverse(self) -> ReverseNatural<T> {
        ReverseNatural::new()
    }
}

impl<T: Ord + ?Sized> Comparator<T> for Natural<T> {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

impl<T: ?Sized> ReverseNatural<T> {
    /// Returns the natural order.
    #[must_use]
    pub const fn reverse(self) -> Natural<T> {
        Natural::new()
    }
}

impl<T: Ord + ?Sized> Comparator<T> for ReverseNatural<T> {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        right.cmp(left)
    }
}

/// Returns the natural order.
#[must_use]
pub const fn natural<T: Ord + ?Sized>() -> Natural<T> {
    Natural::new()
}

/// Returns the reverse natural order.
#[must_use]
pub const fn reverse_natural<T: Ord + ?Sized>() -> ReverseNatural<T> {
    ReverseNatural::new()
}

// =============================================================================
// Factories
// =============================================================================

/// A comparator backed by a function.
#[derive(Clone, Copy)]
pub struct FromFn<F> {
    function: F,
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FromFn").finish_non_exhaustive()
    }
}

impl<T: ?Sized, F> Comparator<T> for FromFn<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.function)(left, right)
    }
}

/// Wraps a comparison function as a [`Comparator`].
#[must_use]
pub const fn from_fn<T, F>(function: F) -> FromFn<F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    FromFn { function }
}

/// Orders values by their position in a list given at construction.
///
/// [`Explicit::try_compare`] rejects values that were not listed.
/// Through [`Comparator::compare`], unlisted values order after every listed
/// value and equal to each other.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use setwise::compare::{explicit, Comparator};
///
/// let priority = explicit(["high", "medium", "low"]).unwrap();
/// assert_eq!(priority.compare(&"high", &"low"), Ordering::Less);
/// assert_eq!(priority.compare(&"urgent", &"low"), Ordering::Greater);
/// assert!(priority.try_compare(&"urgent", &"low").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Explicit<T> {
    ranks: HashMap<T, usize>,
}

impl<T: Hash + Eq + fmt::Debug> Explicit<T> {
    /// Compares two listed values.
    ///
    /// # Errors
    ///
    /// Returns `IncomparableValue` for the first operand that was not
    /// listed.
    pub fn try_compare(&self, left: &T, right: &T) -> Result<Ordering> {
        Ok(self.rank(left)?.cmp(&self.rank(right)?))
    }

    fn rank(&self, value: &T) -> Result<usize> {
        self.ranks
            .get(value)
            .copied()
            .ok_or_else(|| CollectionError::IncomparableValue {
                value: format!("{value:?}"),
            })
    }
}

impl<T: Hash + Eq> Comparator<T> for Explicit<T> {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        let rank = |value: &T| self.ranks.get(value).copied().unwrap_or(usize::MAX);
        rank(left).cmp(&rank(right))
    }
}

/// Creates a comparator that orders values as they appear in `values`.
///
/// # Errors
///
/// Returns `InvalidArgument` if a value is listed twice.
pub fn explicit<T, I>(values: I) -> Result<Explicit<T>>
where
    T: Hash + Eq + fmt::Debug,
    I: IntoIterator<Item = T>,
{
    let mut ranks = HashMap::new();
    for value in values {
        if ranks.contains_key(&value) {
            tracing::debug!(value = ?value, "rejected explicit ordering with duplicate value");
            return Err(CollectionError::invalid_argument(format!(
                "Multiple elements with same value: {value:?}"
            )));
        }
        let rank = ranks.len();
        ranks.insert(value, rank);
    }
    Ok(Explicit { ranks })
}

impl<T: ?Sized> Comparator<T> for AllEqual<T> {
    #[inline]
    fn compare(&self, _left: &T, _right: &T) -> Ordering {
        Ordering::Equal
    }
}

/// Returns a comparator that treats all values as equal.
#[must_use]
pub const fn all_equal<T: ?Sized>() -> AllEqual<T> {
    AllEqual::new()
}

impl<T: fmt::Display + ?Sized> Comparator<T> for UsingToString<T> {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.to_string().cmp(&right.to_string())
    }
}

/// Returns a comparator that orders values by their `Display` rendering.
#[must_use]
pub const fn using_to_string<T: fmt::Display + ?Sized>() -> UsingToString<T> {
    UsingToString::new()
}

/// Applies a sequence of comparators in turn until one is decisive.
pub struct CompoundAll<T: ?Sized> {
    comparators: Vec<Box<dyn Comparator<T>>>,
}

impl<T: ?Sized> fmt::Debug for CompoundAll<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CompoundAll")
            .field("len", &self.comparators.len())
            .finish()
    }
}

impl<T: ?Sized> Comparator<T> for CompoundAll<T> {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.comparators
            .iter()
            .map(|comparator| comparator.compare(left, right))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

/// Combines comparators in priority order.
///
/// An empty sequence yields a comparator under which all values are equal.
///
/// # Examples
///
/// ```rust
/// use setwise::compare::{compound_all, natural, Comparator};
///
/// let by_parity_then_value = compound_all::<i32, _>([
///     Box::new(natural().on_result_of(|value: &i32| value % 2)) as Box<dyn Comparator<i32>>,
///     Box::new(natural()),
/// ]);
/// assert_eq!(by_parity_then_value.sorted_copy([3, 2, 1, 4]), vec![2, 4, 1, 3]);
/// ```
pub fn compound_all<T, I>(comparators: I) -> CompoundAll<T>
where
    T: ?Sized,
    I: IntoIterator<Item = Box<dyn Comparator<T>>>,
{
    CompoundAll {
        comparators: comparators.into_iter().collect(),
    }
}

// =============================================================================
// Combinators
// =============================================================================

/// Reverses a comparator. Created by [`Comparator::reverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reverse<C> {
    comparator: C,
}

impl<C> Reverse<C> {
    /// Returns the comparator that was reversed.
    #[must_use]
    pub fn reverse(self) -> C {
        self.comparator
    }
}

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reverse<C> {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.comparator.compare(right, left)
    }
}

/// Orders `None` first. Created by [`Comparator::nulls_first`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NullsFirst<C> {
    comparator: C,
}

impl<T, C: Comparator<T>> Comparator<Option<T>> for NullsFirst<C> {
    fn compare(&self, left: &Option<T>, right: &Option<T>) -> Ordering {
        match (left, right) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(left), Some(right)) => self.comparator.compare(left, right),
        }
    }
}

/// Orders `None` last. Created by [`Comparator::nulls_last`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NullsLast<C> {
    comparator: C,
}

impl<T, C: Comparator<T>> Comparator<Option<T>> for NullsLast<C> {
    fn compare(&self, left: &Option<T>, right: &Option<T>) -> Ordering {
        match (left, right) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(left), Some(right)) => self.comparator.compare(left, right),
        }
    }
}

/// Compares the results of a function. Created by
/// [`Comparator::on_result_of`].
pub struct OnResultOf<C, F, T> {
    comparator: C,
    function: F,
    result: PhantomData<fn() -> T>,
}

impl<C: Clone, F: Clone, T> Clone for OnResultOf<C, F, T> {
    fn clone(&self) -> Self {
        Self {
            comparator: self.comparator.clone(),
            function: self.function.clone(),
            result: PhantomData,
        }
    }
}

impl<C: fmt::Debug, F, T> fmt::Debug for OnResultOf<C, F, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("OnResultOf")
            .field("comparator", &self.comparator)
            .finish_non_exhaustive()
    }
}

impl<S, T, C, F> Comparator<S> for OnResultOf<C, F, T>
where
    C: Comparator<T>,
    F: Fn(&S) -> T,
{
    fn compare(&self, left: &S, right: &S) -> Ordering {
        self.comparator
            .compare(&(self.function)(left), &(self.function)(right))
    }
}

/// Breaks ties of one comparator with another. Created by
/// [`Comparator::compound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Compound<A, B> {
    primary: A,
    secondary: B,
}

impl<T: ?Sized, A: Comparator<T>, B: Comparator<T>> Comparator<T> for Compound<A, B> {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.primary
            .compare(left, right)
            .then_with(|| self.secondary.compare(left, right))
    }
}

/// Element-by-element order on sequences. Created by
/// [`Comparator::lexicographical`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lexicographical<C> {
    comparator: C,
}

impl<T, C: Comparator<T>> Comparator<[T]> for Lexicographical<C> {
    fn compare(&self, left: &[T], right: &[T]) -> Ordering {
        left.iter()
            .zip(right)
            .map(|(left, right)| self.comparator.compare(left, right))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or_else(|| left.len().cmp(&right.len()))
    }
}

// =============================================================================
// Tests
// =============================================================================
