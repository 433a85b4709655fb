#![cfg(feature = "collect")]
//! Property-based tests for CartesianProduct laws.
//!
//! These tests compare the lazy product against an eagerly built product of
//! the same axes.

use proptest::prelude::*;
use setwise::collect::{CartesianProduct, ListView};

fn axes() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(any::<u8>(), 0..4), 0..4)
}

fn eager_product(axes: &[Vec<u8>]) -> Vec<Vec<u8>> {
    axes.iter().fold(vec![Vec::new()], |prefixes, axis| {
        prefixes
            .iter()
            .flat_map(|prefix| {
                axis.iter().map(move |element| {
                    let mut tuple = prefix.clone();
                    tuple.push(*element);
                    tuple
                })
            })
            .collect()
    })
}

// =============================================================================
// Enumeration Law
// Description: the lazy product yields the eager product in the same order
// =============================================================================

proptest! {
    #[test]
    fn prop_enumeration_law(axes in axes()) {
        let product = CartesianProduct::new(axes.clone()).unwrap();
        let lazy: Vec<Vec<u8>> = product.iter().map(|tuple| tuple.to_vec()).collect();

        prop_assert_eq!(lazy, eager_product(&axes));
    }
}

// =============================================================================
// Size Law
// Description: |A_0 x .. x A_k| = |A_0| * .. * |A_k|
// =============================================================================

proptest! {
    #[test]
    fn prop_size_law(axes in axes()) {
        let product = CartesianProduct::new(axes.clone()).unwrap();
        let expected: usize = axes.iter().map(Vec::len).product();

        prop_assert_eq!(product.len(), expected);
        prop_assert_eq!(product.iter().len(), expected);
    }
}

// =============================================================================
// Membership Law
// Description: every enumerated tuple is contained, and tuples of the wrong
// length never are
// =============================================================================

proptest! {
    #[test]
    fn prop_membership_law(axes in axes(), extra: u8) {
        let product = CartesianProduct::new(axes.clone()).unwrap();
        for tuple in product.iter() {
            let elements = tuple.to_vec();
            prop_assert!(product.contains(&elements));

            let mut longer = elements;
            longer.push(extra);
            prop_assert!(!product.contains(&longer));
        }
    }
}

// =============================================================================
// Random Access Law
// Description: get(i) equals the i-th enumerated tuple, and every tuple
// element lies in its axis
// =============================================================================

proptest! {
    #[test]
    fn prop_random_access_law(axes in axes(), index_seed: usize) {
        let product = CartesianProduct::new(axes.clone()).unwrap();
        prop_assume!(!product.is_empty());
        let index = index_seed % product.len();
        let tuple = product.get(index).unwrap();

        prop_assert_eq!(Some(tuple), product.iter().nth(index));
        for (axis, element) in axes.iter().zip(tuple.iter()) {
            prop_assert!(axis.contains(element));
        }
        prop_assert!(ListView::get(&tuple, axes.len()).is_err());
    }
}
