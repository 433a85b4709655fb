//! Equivalence strategies.
//!
//! An [`Equivalence`] decides whether two values count as the same and gives
//! a hash code consistent with that decision. [`equals`] uses `==` with
//! [`HashCode`]; [`identity`] compares addresses.

use std::fmt;
use std::marker::PhantomData;

use crate::hash::HashCode;

/// A strategy for deciding whether two values are equivalent.
///
/// `hash` must agree with `equivalent`: equivalent values hash alike.
pub trait Equivalence<T: ?Sized> {
    /// Returns `true` if `left` and `right` are equivalent.
    fn equivalent(&self, left: &T, right: &T) -> bool;

    /// Returns a hash code for `value` consistent with
    /// [`equivalent`](Equivalence::equivalent).
    fn hash(&self, value: &T) -> i32;

    /// Lifts this equivalence to slices compared element by element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::collect::equivalence::{equals, Equivalence};
    ///
    /// let pairwise = equals().pairwise();
    /// assert!(pairwise.equivalent(&[1, 2][..], &[1, 2][..]));
    /// assert!(!pairwise.equivalent(&[1, 2][..], &[1][..]));
    /// ```
    fn pairwise(self) -> Pairwise<Self>
    where
        Self: Sized,
    {
        Pairwise { element: self }
    }
}

impl<T: ?Sized, Q: Equivalence<T> + ?Sized> Equivalence<T> for &Q {
    fn equivalent(&self, left: &T, right: &T) -> bool {
        (**self).equivalent(left, right)
    }

    fn hash(&self, value: &T) -> i32 {
        (**self).hash(value)
    }
}

/// Equivalence by `==`, hashed with [`HashCode`].
pub struct Equals<T: ?Sized>(PhantomData<fn(&T)>);

/// Equivalence by address: a value is only equivalent to itself.
pub struct Identity<T: ?Sized>(PhantomData<fn(&T)>);

macro_rules! impl_marker_traits {
    ($($name:ident),*) => {
        $(
            impl<T: ?Sized> Clone for $name<T> {
                fn clone(&self) -> Self {
                    *self
                }
            }

            impl<T: ?Sized> Copy for $name<T> {}

            impl<T: ?Sized> Default for $name<T> {
                fn default() -> Self {
                    Self(PhantomData)
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

impl_marker_traits!(Equals, Identity);

impl<T: PartialEq + HashCode + ?Sized> Equivalence<T> for Equals<T> {
    #[inline]
    fn equivalent(&self, left: &T, right: &T) -> bool {
        left == right
    }

    #[inline]
    fn hash(&self, value: &T) -> i32 {
        value.hash_code()
    }
}

impl<T: ?Sized> Equivalence<T> for Identity<T> {
    #[inline]
    fn equivalent(&self, left: &T, right: &T) -> bool {
        std::ptr::eq(left, right)
    }

    fn hash(&self, value: &T) -> i32 {
        let address = std::ptr::from_ref(value).addr();
        (address as u64).hash_code()
    }
}

/// Returns the equivalence that uses `==`.
#[must_use]
pub const fn equals<T: PartialEq + HashCode + ?Sized>() -> Equals<T> {
    Equals(PhantomData)
}

/// Returns the equivalence that compares addresses.
///
/// # Examples
///
/// ```rust
/// use setwise::collect::equivalence::{identity, Equivalence};
///
/// let first = String::from("same");
/// let second = String::from("same");
/// assert!(identity().equivalent(&first, &first));
/// assert!(!identity().equivalent(&first, &second));
/// ```
#[must_use]
pub const fn identity<T: ?Sized>() -> Identity<T> {
    Identity(PhantomData)
}

/// An element equivalence lifted to slices.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pairwise<Q> {
    element: Q,
}

impl<T, Q: Equivalence<T>> Equivalence<[T]> for Pairwise<Q> {
    fn equivalent(&self, left: &[T], right: &[T]) -> bool {
        left.len() == right.len()
            && left
                .iter()
                .zip(right)
                .all(|(left, right)| self.element.equivalent(left, right))
    }

    fn hash(&self, value: &[T]) -> i32 {
        value.iter().fold(1_i32, |hash, element| {
            hash.wrapping_mul(31)
                .wrapping_add(self.element.hash(element))
        })
    }
}
