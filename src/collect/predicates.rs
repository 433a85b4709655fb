//! Predicate adapters.

use super::sets::SetView;

/// Returns a predicate that holds for members of `collection`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use setwise::collect::predicates::{is_in, not};
///
/// let vowels: HashSet<char> = "aeiou".chars().collect();
/// let consonants: String = "predicate".chars().filter(|c| not(is_in(&vowels))(c)).collect();
/// assert_eq!(consonants, "prdct");
/// ```
pub fn is_in<S>(collection: &S) -> impl Fn(&S::Element) -> bool + '_
where
    S: SetView + ?Sized,
{
    move |element| collection.contains(element)
}

/// Returns the negation of `predicate`.
pub fn not<T, P>(predicate: P) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Fn(&T) -> bool,
{
    move |value| !predicate(value)
}

/// Returns a predicate that holds for values equal to `target`.
pub fn equal_to<T: PartialEq>(target: T) -> impl Fn(&T) -> bool {
    move |value| *value == target
}

/// Returns a predicate that holds when both predicates hold.
pub fn and<T, A, B>(first: A, second: B) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    A: Fn(&T) -> bool,
    B: Fn(&T) -> bool,
{
    move |value| first(value) && second(value)
}

/// Returns a predicate that holds when either predicate holds.
pub fn or<T, A, B>(first: A, second: B) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    A: Fn(&T) -> bool,
    B: Fn(&T) -> bool,
{
    move |value| first(value) || second(value)
}
