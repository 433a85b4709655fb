#![cfg(feature = "collect")]
//! Integration tests for SetView and the set-operation views.

use std::collections::{BTreeSet, HashSet};

use enum_iterator::Sequence;
use rstest::{fixture, rstest};
use setwise::collect::sets::{self, complement_of};
use setwise::collect::{PowerSet, SetView};
use setwise::hash::HashCode;
use setwise::immutables::ImmutableSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

#[fixture]
fn primes() -> BTreeSet<u32> {
    [2, 3, 5, 7, 11].into_iter().collect()
}

#[fixture]
fn odds() -> HashSet<u32> {
    [1, 3, 5, 7, 9].into_iter().collect()
}

fn sorted<S: SetView<Element = u32>>(view: &S) -> Vec<u32> {
    let mut elements: Vec<u32> = view.iter().copied().collect();
    elements.sort_unstable();
    elements
}

// =============================================================================
// Views across set types
// =============================================================================

#[rstest]
fn test_union_across_set_types(primes: BTreeSet<u32>, odds: HashSet<u32>) {
    let view = sets::union(&primes, &odds);
    assert_eq!(sorted(&view), vec![1, 2, 3, 5, 7, 9, 11]);
    assert_eq!(view.len(), 7);
    assert!(view.contains(&9));
    assert!(!view.contains(&4));
}

#[rstest]
fn test_union_iterates_left_first(primes: BTreeSet<u32>, odds: HashSet<u32>) {
    let view = sets::union(&primes, &odds);
    let prefix: Vec<u32> = view.iter().take(primes.len()).copied().collect();
    assert_eq!(prefix, vec![2, 3, 5, 7, 11]);
}

#[rstest]
fn test_intersection_and_difference(primes: BTreeSet<u32>, odds: HashSet<u32>) {
    assert_eq!(sorted(&sets::intersection(&primes, &odds)), vec![3, 5, 7]);
    assert_eq!(sorted(&sets::difference(&primes, &odds)), vec![2, 11]);
    assert_eq!(sorted(&sets::difference(&odds, &primes)), vec![1, 9]);
    assert_eq!(
        sorted(&sets::symmetric_difference(&primes, &odds)),
        vec![1, 2, 9, 11]
    );
}

#[rstest]
fn test_views_stay_live_over_their_sources(primes: BTreeSet<u32>) {
    let mut growing: HashSet<u32> = HashSet::new();
    growing.insert(2);
    {
        let view = sets::intersection(&primes, &growing);
        assert_eq!(view.len(), 1);
    }
    growing.insert(3);
    let view = sets::intersection(&primes, &growing);
    assert_eq!(view.len(), 2);
}

#[rstest]
fn test_hash_code_matches_materialized_set(primes: BTreeSet<u32>, odds: HashSet<u32>) {
    let view = sets::symmetric_difference(&primes, &odds);
    let materialized: HashSet<u32> = view.iter().copied().collect();
    assert_eq!(view.hash_code(), materialized.hash_code());
}

#[rstest]
fn test_set_equality_across_types() {
    let hash_set: HashSet<&str> = ["a", "b"].into_iter().collect();
    let btree_set: BTreeSet<&str> = ["b", "a"].into_iter().collect();
    let immutable = ImmutableSet::of(["a", "b"]);
    assert!(hash_set.set_equals(&btree_set));
    assert!(immutable.set_equals(&hash_set));
    assert!(!immutable.set_equals(&ImmutableSet::of(["a"])));
}

#[rstest]
fn test_subset_of_power_set_is_a_set_view() {
    let power_set = PowerSet::new([1_u32, 3, 5]).unwrap();
    let subset = power_set.get(0b110).unwrap();
    let odds: HashSet<u32> = [1, 3, 5, 7, 9].into_iter().collect();
    assert!(subset.is_subset_of(&odds));
    assert_eq!(sorted(&sets::intersection(&subset, &odds)), vec![3, 5]);
}

// =============================================================================
// Enum complements
// =============================================================================

#[rstest]
fn test_complement_in_declaration_order() {
    let complement = complement_of([Suit::Hearts, Suit::Clubs]);
    assert_eq!(
        complement.iter().copied().collect::<Vec<_>>(),
        vec![Suit::Diamonds, Suit::Spades]
    );
}

#[rstest]
#[case(vec![], 4)]
#[case(vec![Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades], 0)]
fn test_complement_extremes(#[case] elements: Vec<Suit>, #[case] expected: usize) {
    assert_eq!(complement_of(elements).len(), expected);
}
