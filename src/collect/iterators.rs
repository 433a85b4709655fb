//! Iterator helpers.
//!
//! Small functions over any `IntoIterator` that report misuse as
//! [`CollectionError`] instead of panicking.

use std::fmt;
use std::iter::Flatten;

use super::sets::SetView;
use crate::error::{CollectionError, Result};

/// Largest number of elements shown by [`get_only_element`]'s error.
const SHOWN_ELEMENTS: usize = 5;

/// Returns the number of elements, consuming the iterator.
pub fn size<I: IntoIterator>(elements: I) -> usize {
    elements.into_iter().count()
}

/// Chains many iterables into one.
///
/// # Examples
///
/// ```rust
/// use setwise::collect::iterators::concat;
///
/// let joined: Vec<i32> = concat([vec![1, 2], vec![], vec![3]]).collect();
/// assert_eq!(joined, vec![1, 2, 3]);
/// ```
pub fn concat<I>(iterables: I) -> Flatten<I::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    iterables.into_iter().flatten()
}

/// Returns `true` if both sides yield equal elements in the same order and
/// have the same length.
pub fn elements_equal<L, R>(left: L, right: R) -> bool
where
    L: IntoIterator,
    R: IntoIterator,
    L::Item: PartialEq<R::Item>,
{
    left.into_iter().eq(right)
}

/// Returns the single element of `elements`.
///
/// # Errors
///
/// Returns `EndOfSequence` if `elements` is empty, or `InvalidArgument`
/// listing the first few elements if there is more than one.
///
/// # Examples
///
/// ```rust
/// use setwise::collect::iterators::get_only_element;
/// use setwise::error::CollectionError;
///
/// assert_eq!(get_only_element([7]), Ok(7));
/// assert_eq!(get_only_element(Vec::<i32>::new()), Err(CollectionError::EndOfSequence));
/// assert_eq!(
///     get_only_element(1..=7).unwrap_err().to_string(),
///     "invalid argument: expected one element but was: <1, 2, 3, 4, 5, ...>"
/// );
/// ```
pub fn get_only_element<I>(elements: I) -> Result<I::Item>
where
    I: IntoIterator,
    I::Item: fmt::Debug,
{
    let mut iterator = elements.into_iter();
    let first = iterator.next().ok_or(CollectionError::EndOfSequence)?;
    only_or_error(first, iterator)
}

/// Returns the single element of `elements`, or `default` if it is empty.
///
/// # Errors
///
/// Returns `InvalidArgument` if there is more than one element.
pub fn get_only_element_or<I>(elements: I, default: I::Item) -> Result<I::Item>
where
    I: IntoIterator,
    I::Item: fmt::Debug,
{
    let mut iterator = elements.into_iter();
    match iterator.next() {
        Some(first) => only_or_error(first, iterator),
        None => Ok(default),
    }
}

fn only_or_error<T, I>(first: T, mut rest: I) -> Result<T>
where
    T: fmt::Debug,
    I: Iterator<Item = T>,
{
    let Some(second) = rest.next() else {
        return Ok(first);
    };
    let mut message = format!("expected one element but was: <{first:?}, {second:?}");
    for (shown, element) in (2..).zip(rest) {
        if shown == SHOWN_ELEMENTS {
            message.push_str(", ...");
            break;
        }
        message.push_str(&format!(", {element:?}"));
    }
    message.push('>');
    Err(CollectionError::invalid_argument(message))
}

/// Advances `iterator`, failing instead of returning `None`.
///
/// # Errors
///
/// Returns `EndOfSequence` if the iterator is exhausted.
pub fn try_next<I: Iterator + ?Sized>(iterator: &mut I) -> Result<I::Item> {
    iterator.next().ok_or(CollectionError::EndOfSequence)
}

/// Removes every element of `elements` that `to_remove` contains.
///
/// Returns `true` if anything was removed.
pub fn remove_all<S>(elements: &mut Vec<S::Element>, to_remove: &S) -> bool
where
    S: SetView + ?Sized,
{
    remove_if(elements, |element| to_remove.contains(element))
}

/// Removes every element matching `predicate`.
///
/// Returns `true` if anything was removed.
pub fn remove_if<T, P>(elements: &mut Vec<T>, mut predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    let before = elements.len();
    elements.retain(|element| !predicate(element));
    elements.len() != before
}

/// Keeps only the elements matching `predicate`.
///
/// Returns `true` if anything was removed.
pub fn retain_if<T, P>(elements: &mut Vec<T>, mut predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    remove_if(elements, |element| !predicate(element))
}

/// Returns how many elements equal `target`.
pub fn frequency<I>(elements: I, target: &I::Item) -> usize
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    elements
        .into_iter()
        .filter(|element| element == target)
        .count()
}
