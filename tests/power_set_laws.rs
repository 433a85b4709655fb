#![cfg(feature = "collect")]
//! Property-based tests for PowerSet laws.
//!
//! These tests verify that the lazy power set agrees with the mathematical
//! power set of its universe.

use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;
use setwise::collect::{PowerSet, SetView};
use setwise::hash::HashCode;

fn universe() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::btree_set(any::<i32>(), 0..8).prop_map(|set| set.into_iter().collect())
}

// =============================================================================
// Cardinality Law
// Description: |P(S)| = 2^|S| and every subset is enumerated exactly once
// =============================================================================

proptest! {
    #[test]
    fn prop_cardinality_law(elements in universe()) {
        let power_set = PowerSet::new(elements.clone()).unwrap();
        let enumerated: HashSet<BTreeSet<i32>> = power_set
            .iter()
            .map(|subset| subset.iter().copied().collect())
            .collect();

        prop_assert_eq!(power_set.len(), 1 << elements.len());
        prop_assert_eq!(enumerated.len(), power_set.len());
        prop_assert!(power_set.set_equals(&enumerated));
        prop_assert_eq!(power_set.hash_code(), enumerated.hash_code());
    }
}

// =============================================================================
// Membership Law
// Description: T is in P(S) iff T is a subset of S
// =============================================================================

proptest! {
    #[test]
    fn prop_membership_law(
        elements in universe(),
        candidate in prop::collection::hash_set(any::<i32>(), 0..4)
    ) {
        let power_set = PowerSet::new(elements.clone()).unwrap();
        let expected = candidate.iter().all(|element| elements.contains(element));

        prop_assert_eq!(power_set.contains(&candidate), expected);
    }
}

// =============================================================================
// Subset Law
// Description: each subset holds exactly the elements whose mask bit is set
// =============================================================================

proptest! {
    #[test]
    fn prop_subset_mask_law(elements in universe(), mask_seed: usize) {
        let power_set = PowerSet::new(elements.clone()).unwrap();
        let mask = mask_seed % power_set.len();
        let subset = power_set.get(mask).unwrap();

        prop_assert_eq!(subset.len(), mask.count_ones() as usize);
        for (rank, element) in elements.iter().enumerate() {
            prop_assert_eq!(subset.contains(element), (mask >> rank) & 1 == 1);
        }
        prop_assert!(subset.is_subset_of(power_set.universe()));
    }
}

// =============================================================================
// Hash Code Law
// Description: hash_code(P(S)) = sum of hash_code(T) over all T in P(S)
// =============================================================================

proptest! {
    #[test]
    fn prop_hash_code_law(elements in universe()) {
        let power_set = PowerSet::new(elements).unwrap();
        let summed = power_set
            .iter()
            .fold(0_i32, |sum, subset| sum.wrapping_add(subset.hash_code()));

        prop_assert_eq!(power_set.hash_code(), summed);
    }
}

// =============================================================================
// Equality Law
// Description: power sets are equal iff their universes are equal as sets
// =============================================================================

proptest! {
    #[test]
    fn prop_equality_ignores_order_law(elements in universe()) {
        let mut reversed = elements.clone();
        reversed.reverse();
        let forward = PowerSet::new(elements).unwrap();
        let backward = PowerSet::new(reversed).unwrap();

        prop_assert_eq!(forward.hash_code(), backward.hash_code());
        prop_assert!(forward == backward);
    }
}
