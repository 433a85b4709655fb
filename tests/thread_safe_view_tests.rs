//! Integration tests for sharing views across threads.
//!
//! With the `arc` feature every view and immutable collection is
//! `Send + Sync`, so one view can be read from many threads at once.

#![cfg(all(feature = "arc", feature = "collect"))]

use std::sync::Arc;
use std::thread;

use rstest::rstest;
use setwise::collect::{CartesianProduct, PowerSet};
use setwise::hash::HashCode;
use setwise::immutables::{ImmutableList, ImmutableMap, ImmutableSet};

#[rstest]
fn test_power_set_shared_across_threads() {
    let power_set = Arc::new(PowerSet::new(0..10_u32).unwrap());
    let expected = power_set.hash_code();

    let handles: Vec<_> = (0..4_usize)
        .map(|worker| {
            let power_set = Arc::clone(&power_set);
            thread::spawn(move || {
                power_set
                    .iter()
                    .skip(worker)
                    .step_by(4)
                    .fold(0_i32, |sum, subset| sum.wrapping_add(subset.hash_code()))
            })
        })
        .collect();

    let total = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .fold(0_i32, i32::wrapping_add);
    assert_eq!(total, expected);
}

#[rstest]
fn test_subsets_move_between_threads() {
    let power_set = PowerSet::new(["a", "b", "c"]).unwrap();
    let subset = power_set.get(0b101).unwrap();
    let size = thread::spawn(move || subset.len()).join().unwrap();
    assert_eq!(size, 2);
}

#[rstest]
fn test_cartesian_product_shared_across_threads() {
    let product = Arc::new(CartesianProduct::new([vec![1, 2, 3], vec![4, 5]]).unwrap());

    let handles: Vec<_> = (0..product.len())
        .map(|index| {
            let product = Arc::clone(&product);
            thread::spawn(move || product.get(index).map(|tuple| tuple.to_vec()))
        })
        .collect();

    let tuples: Vec<Vec<i32>> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap().unwrap())
        .collect();
    assert_eq!(tuples[0], vec![1, 4]);
    assert_eq!(tuples[5], vec![3, 5]);
}

#[rstest]
fn test_immutable_collections_are_send_and_sync() {
    let list = ImmutableList::of([1, 2, 3]);
    let set = ImmutableSet::of(["x", "y"]);
    let map = ImmutableMap::try_copy_of([(1, "one")]).unwrap();

    let handle = thread::spawn(move || (list.len(), set.len(), map.get(&1).copied()));
    assert_eq!(handle.join().unwrap(), (3, 2, Some("one")));
}
