#![cfg(feature = "collect")]
//! Integration tests for the list, map, iterator, equivalence and predicate
//! utilities.

use std::collections::{BTreeMap, HashMap, HashSet};

use rstest::rstest;
use setwise::collect::equivalence::{Equivalence, equals, identity};
use setwise::collect::{ListView, iterators, lists, maps, predicates};
use setwise::compare::{Comparator, natural};
use setwise::error::CollectionError;
use setwise::immutables::ImmutableMap;

// =============================================================================
// Lists
// =============================================================================

#[rstest]
fn test_partition_then_reverse() {
    let pages = lists::partition(&[1, 2, 3, 4, 5, 6, 7], 3).unwrap();
    let last_page = pages.last().unwrap();
    assert_eq!(last_page, &[7]);

    let reversed = lists::reverse(pages.get(1).unwrap());
    assert_eq!(reversed.iter().copied().collect::<Vec<_>>(), vec![6, 5, 4]);
}

#[rstest]
fn test_transform_over_partitions() {
    let elements = [1, 2, 3, 4, 5];
    let pages = lists::partition(&elements, 2).unwrap();
    let page_sums: Vec<i32> = pages.iter().map(|page| page.iter().sum()).collect();
    assert_eq!(page_sums, vec![3, 7, 5]);

    let labels = lists::transform(&elements, |value| format!("#{value}"));
    assert_eq!(labels.first(), Some("#1".to_string()));
    assert_eq!(
        labels.get(9).unwrap_err(),
        CollectionError::IndexOutOfRange { index: 9, size: 5 }
    );
}

#[rstest]
fn test_sorted_copy_with_reversed_natural() {
    let sorted = lists::sorted_copy(vec!["pear", "apple", "fig"], &natural().reverse());
    assert_eq!(sorted, vec!["pear", "fig", "apple"]);
}

// =============================================================================
// Maps
// =============================================================================

#[rstest]
fn test_difference_between_map_kinds() {
    let inventory = HashMap::from([("bolt", 10), ("nut", 4), ("washer", 7)]);
    let expected = ImmutableMap::try_copy_of([("bolt", 10), ("nut", 5), ("screw", 1)]).unwrap();

    let difference = maps::difference(&inventory, &expected);
    assert!(!difference.are_equal());
    assert_eq!(difference.entries_only_on_left().len(), 1);
    assert!(difference.entries_only_on_left().contains_key("washer"));
    assert_eq!(
        difference.entries_only_on_right().iter().collect::<Vec<_>>(),
        vec![(&"screw", &1)]
    );
    assert_eq!(difference.entries_in_common().get("bolt"), Some(&10));

    let nut = difference.entries_differing().get("nut").unwrap();
    assert_eq!((nut.left_value(), nut.right_value()), (&4, &5));
}

#[rstest]
fn test_difference_of_identical_maps_is_equal() {
    let map = BTreeMap::from([(1, 'a'), (2, 'b')]);
    let difference = maps::difference(&map, &map.clone());
    assert!(difference.are_equal());
    assert_eq!(difference.to_string(), "equal");
    assert_eq!(difference.entries_in_common().len(), 2);
}

#[rstest]
fn test_transformed_views_recompute() {
    let prices = BTreeMap::from([("tea", 3), ("coffee", 4)]);
    let taxed = maps::transform_values(&prices, |price| price * 110 / 100);
    assert_eq!(taxed.get(&"coffee"), Some(4));
    assert_eq!(taxed.keys().copied().collect::<Vec<_>>(), vec!["coffee", "tea"]);

    let menu = maps::transform_entries(&prices, |item, price| format!("{item} {price}"));
    assert_eq!(menu.iter().map(|(_, line)| line).collect::<Vec<_>>(), vec!["coffee 4", "tea 3"]);
}

// =============================================================================
// Iterators
// =============================================================================

#[rstest]
fn test_get_only_element_variants() {
    assert_eq!(iterators::get_only_element(Some(3)), Ok(3));
    assert_eq!(
        iterators::get_only_element(None::<i32>),
        Err(CollectionError::EndOfSequence)
    );
    assert_eq!(
        iterators::get_only_element(["a", "b"]).unwrap_err().to_string(),
        "invalid argument: expected one element but was: <\"a\", \"b\">"
    );
}

#[rstest]
fn test_try_next_past_the_end() {
    let mut letters = "ab".chars();
    assert_eq!(iterators::try_next(&mut letters), Ok('a'));
    assert_eq!(iterators::try_next(&mut letters), Ok('b'));
    assert_eq!(
        iterators::try_next(&mut letters),
        Err(CollectionError::EndOfSequence)
    );
}

#[rstest]
fn test_remove_all_with_predicates() {
    let banned: HashSet<&str> = ["spam", "eggs"].into_iter().collect();
    let mut words = vec!["ham", "spam", "jam", "eggs"];
    assert!(iterators::remove_all(&mut words, &banned));
    assert_eq!(words, vec!["ham", "jam"]);

    let keep = predicates::not(predicates::is_in(&banned));
    assert!(keep(&"ham"));
    assert!(!keep(&"spam"));
}

// =============================================================================
// Equivalence
// =============================================================================

#[rstest]
fn test_equals_and_identity_differ_on_copies() {
    let original = String::from("value");
    let copy = original.clone();
    assert!(equals().equivalent(&original, &copy));
    assert!(!identity().equivalent(&original, &copy));
    assert!(identity().equivalent(&original, &original));
}

#[rstest]
fn test_pairwise_equivalence_on_slices() {
    let pairwise = equals::<char>().pairwise();
    assert!(pairwise.equivalent(&['a', 'b'][..], &['a', 'b'][..]));
    assert!(!pairwise.equivalent(&['a', 'b'][..], &['b', 'a'][..]));
    assert!(iterators::elements_equal(['a', 'b'], ['a', 'b']));
    assert!(natural().is_ordered(&['a', 'b']));
}
