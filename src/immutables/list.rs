//! Immutable list.
//!
//! [`ImmutableList`] is a reference-counted slice. Cloning shares the
//! elements; nothing can modify them after construction.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use crate::ReferenceCounter;
use crate::error::{CollectionError, Result, check_element_index};
use crate::hash::{HashCode, list_hash_code};

// =============================================================================
// ImmutableList Definition
// =============================================================================

/// An immutable, ordered sequence of elements.
///
/// # Time Complexity
///
/// | Operation  | Complexity |
/// |------------|------------|
/// | `clone`    | O(1)       |
/// | `get`      | O(1)       |
/// | `len`      | O(1)       |
/// | `contains` | O(n)       |
///
/// # Examples
///
/// ```rust
/// use setwise::immutables::ImmutableList;
///
/// let list = ImmutableList::copy_of(vec![1, 2, 3]);
/// let shared = list.clone();
///
/// assert_eq!(list, shared);
/// assert_eq!(shared.get(2), Ok(&3));
/// assert!(shared.get(3).is_err());
/// ```
pub struct ImmutableList<E> {
    elements: ReferenceCounter<[E]>,
}

impl<E> ImmutableList<E> {
    /// Creates an empty list.
    #[must_use]
    pub fn empty() -> Self {
        Self::from(Vec::new())
    }

    /// Creates a list of the given elements.
    #[must_use]
    pub fn of<const N: usize>(elements: [E; N]) -> Self {
        Self::from(Vec::from(elements))
    }

    /// Creates a list holding `elements` in iteration order.
    #[must_use]
    pub fn copy_of<I: IntoIterator<Item = E>>(elements: I) -> Self {
        elements.into_iter().collect()
    }

    /// Creates a list from elements that may be absent.
    ///
    /// # Errors
    ///
    /// Returns `NullElement` naming the first absent position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::error::CollectionError;
    /// use setwise::immutables::ImmutableList;
    ///
    /// assert!(ImmutableList::try_copy_of_options([Some(1), Some(2)]).is_ok());
    /// assert_eq!(
    ///     ImmutableList::try_copy_of_options([Some(1), None]),
    ///     Err(CollectionError::null_element("index 1"))
    /// );
    /// ```
    pub fn try_copy_of_options<I>(elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<E>>,
    {
        elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| {
                element.ok_or_else(|| CollectionError::null_element(format!("index {index}")))
            })
            .collect()
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the list has no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` unless `index < len()`.
    pub fn get(&self, index: usize) -> Result<&E> {
        check_element_index(index, self.len()).map(|index| &self.elements[index])
    }

    /// Returns the first element, if any.
    #[must_use]
    pub fn first(&self) -> Option<&E> {
        self.elements.first()
    }

    /// Returns the last element, if any.
    #[must_use]
    pub fn last(&self) -> Option<&E> {
        self.elements.last()
    }

    /// Returns the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[E] {
        &self.elements
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.elements.iter()
    }
}

impl<E: PartialEq> ImmutableList<E> {
    /// Returns `true` if some element equals `element`.
    pub fn contains(&self, element: &E) -> bool {
        self.elements.contains(element)
    }

    /// Returns the position of the first element equal to `element`.
    pub fn index_of(&self, element: &E) -> Option<usize> {
        self.elements.iter().position(|candidate| candidate == element)
    }

    /// Returns the position of the last element equal to `element`.
    pub fn last_index_of(&self, element: &E) -> Option<usize> {
        self.elements.iter().rposition(|candidate| candidate == element)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An owning iterator over an [`ImmutableList`].
///
/// The elements are shared, so each one is cloned as it is yielded.
pub struct ImmutableListIntoIterator<E> {
    list: ImmutableList<E>,
    front: usize,
    back: usize,
}

impl<E: Clone> Iterator for ImmutableListIntoIterator<E> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let element = self.list.elements[self.front].clone();
            self.front += 1;
            Some(element)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<E: Clone> DoubleEndedIterator for ImmutableListIntoIterator<E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.list.elements[self.back].clone())
        } else {
            None
        }
    }
}

impl<E: Clone> ExactSizeIterator for ImmutableListIntoIterator<E> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<E> Clone for ImmutableList<E> {
    fn clone(&self) -> Self {
        Self {
            elements: ReferenceCounter::clone(&self.elements),
        }
    }
}

impl<E> Default for ImmutableList<E> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<E> From<Vec<E>> for ImmutableList<E> {
    fn from(elements: Vec<E>) -> Self {
        Self {
            elements: ReferenceCounter::from(elements),
        }
    }
}

impl<E> FromIterator<E> for ImmutableList<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<E>>())
    }
}

impl<E> AsRef<[E]> for ImmutableList<E> {
    fn as_ref(&self) -> &[E] {
        self.as_slice()
    }
}

impl<E> std::ops::Deref for ImmutableList<E> {
    type Target = [E];

    fn deref(&self) -> &[E] {
        &self.elements
    }
}

impl<'a, E> IntoIterator for &'a ImmutableList<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: Clone> IntoIterator for ImmutableList<E> {
    type Item = E;
    type IntoIter = ImmutableListIntoIterator<E>;

    fn into_iter(self) -> Self::IntoIter {
        let back = self.len();
        ImmutableListIntoIterator {
            list: self,
            front: 0,
            back,
        }
    }
}

impl<E: PartialEq> PartialEq for ImmutableList<E> {
    fn eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.elements, &other.elements)
            || self.as_slice() == other.as_slice()
    }
}

impl<E: Eq> Eq for ImmutableList<E> {}

impl<E: PartialEq> PartialEq<[E]> for ImmutableList<E> {
    fn eq(&self, other: &[E]) -> bool {
        self.as_slice() == other
    }
}

impl<E: PartialEq> PartialEq<Vec<E>> for ImmutableList<E> {
    fn eq(&self, other: &Vec<E>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<E: Hash> Hash for ImmutableList<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<E: HashCode> HashCode for ImmutableList<E> {
    fn hash_code(&self) -> i32 {
        list_hash_code(self.as_slice())
    }
}

impl<E: fmt::Debug> fmt::Debug for ImmutableList<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<E: fmt::Display> fmt::Display for ImmutableList<E> {
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

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<E: serde::Serialize> serde::Serialize for ImmutableList<E> {
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
impl<'de, E: serde::Deserialize<'de>> serde::Deserialize<'de> for ImmutableList<E> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<E>::deserialize(deserializer).map(Self::from)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_empty() {
        let list: ImmutableList<i32> = ImmutableList::empty();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.first(), None);
    }

    #[rstest]
    fn test_of_derefs_to_slice() {
        let list = ImmutableList::of([4, 5, 6]);
        assert_eq!(list.windows(2).count(), 2);
        assert_eq!(&list[1..], &[5, 6]);
    }

    #[rstest]
    fn test_get_in_range() {
        let list = ImmutableList::copy_of([10, 20, 30]);
        assert_eq!(list.get(0), Ok(&10));
        assert_eq!(list.get(2), Ok(&30));
    }

    #[rstest]
    fn test_get_out_of_range() {
        let list = ImmutableList::copy_of([10, 20, 30]);
        assert_eq!(
            list.get(3),
            Err(CollectionError::IndexOutOfRange { index: 3, size: 3 })
        );
    }

    #[rstest]
    fn test_clone_shares_storage() {
        let list = ImmutableList::copy_of(vec![1, 2, 3]);
        let shared = list.clone();
        assert!(ReferenceCounter::ptr_eq(&list.elements, &shared.elements));
        assert_eq!(list, shared);
    }

    #[rstest]
    fn test_index_of_and_last_index_of() {
        let list = ImmutableList::copy_of(["a", "b", "a"]);
        assert_eq!(list.index_of(&"a"), Some(0));
        assert_eq!(list.last_index_of(&"a"), Some(2));
        assert_eq!(list.index_of(&"z"), None);
        assert!(list.contains(&"b"));
    }

    #[rstest]
    fn test_try_copy_of_options_reports_first_absent_position() {
        let result = ImmutableList::try_copy_of_options([Some(1), None, None]);
        assert_eq!(result, Err(CollectionError::null_element("index 1")));
    }

    #[rstest]
    fn test_owned_iteration_both_ends() {
        let list = ImmutableList::copy_of([1, 2, 3, 4]);
        let mut iterator = list.into_iter();
        assert_eq!(iterator.len(), 4);
        assert_eq!(iterator.next(), Some(1));
        assert_eq!(iterator.next_back(), Some(4));
        assert_eq!(iterator.collect::<Vec<_>>(), vec![2, 3]);
    }

    #[rstest]
    fn test_hash_code_follows_list_convention() {
        let list = ImmutableList::copy_of([1, 2]);
        assert_eq!(list.hash_code(), (31 + 1) * 31 + 2);
        assert_eq!(ImmutableList::<i32>::empty().hash_code(), 1);
    }

    #[rstest]
    fn test_display_and_debug() {
        let list = ImmutableList::copy_of([1, 2, 3]);
        assert_eq!(format!("{list}"), "[1, 2, 3]");
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
        assert_eq!(format!("{}", ImmutableList::<i32>::empty()), "[]");
    }

    #[rstest]
    fn test_equality_with_vec() {
        let list = ImmutableList::copy_of([1, 2]);
        assert_eq!(list, vec![1, 2]);
        assert_ne!(list, vec![2, 1]);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_as_sequence() {
        let list = ImmutableList::copy_of([1, 2, 3]);
        assert_eq!(serde_json::to_string(&list).unwrap(), "[1,2,3]");
    }

    #[rstest]
    fn test_deserialize_from_sequence() {
        let list: ImmutableList<String> = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(list, vec!["a".to_string(), "b".to_string()]);
    }
}
