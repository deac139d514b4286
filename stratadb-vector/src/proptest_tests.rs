//! Property-based tests for the algebra laws.

#![allow(clippy::expect_used, clippy::float_cmp)]

use proptest::prelude::*;

use crate::algebra::{
    add_scalar, dot_product, euclidean_norm, multiply_scalar, sum_of_squares, transform,
};
use crate::types::{HashVector, SortedArrayVector};

/// Strategy for entry lists with unique keys and finite values.
fn arb_entries() -> impl Strategy<Value = Vec<(u64, f64)>> {
    prop::collection::btree_map(0u64..500, -100.0f64..100.0, 0..40)
        .prop_map(|map| map.into_iter().collect())
}

/// Strategy for arbitrary sorted-array-backed vectors.
fn arb_sorted() -> impl Strategy<Value = SortedArrayVector> {
    arb_entries().prop_map(|entries| SortedArrayVector::new(entries).expect("unique keys"))
}

proptest! {
    #[test]
    fn dot_product_is_symmetric(a in arb_sorted(), b in arb_sorted()) {
        prop_assert_eq!(dot_product(&a, &b), dot_product(&b, &a));
    }

    #[test]
    fn dot_product_is_symmetric_across_representations(
        entries_a in arb_entries(),
        entries_b in arb_entries(),
    ) {
        let hashed_a = HashVector::from_entries(entries_a.iter().copied());
        let hashed_b = HashVector::from_entries(entries_b.iter().copied());
        prop_assert_eq!(dot_product(&hashed_a, &hashed_b), dot_product(&hashed_b, &hashed_a));
    }

    #[test]
    fn merge_and_probe_paths_agree(
        entries_a in arb_entries(),
        entries_b in arb_entries(),
    ) {
        let sorted_a = SortedArrayVector::new(entries_a.clone()).expect("unique keys");
        let sorted_b = SortedArrayVector::new(entries_b.clone()).expect("unique keys");
        let hashed_a = HashVector::from_entries(entries_a);
        let hashed_b = HashVector::from_entries(entries_b);

        let merged = dot_product(&sorted_a, &sorted_b);
        prop_assert_eq!(dot_product(&hashed_a, &hashed_b), merged);
        prop_assert_eq!(dot_product(&sorted_a, &hashed_b), merged);
        prop_assert_eq!(dot_product(&hashed_a, &sorted_b), merged);
    }

    #[test]
    fn self_dot_is_the_sum_of_squares(v in arb_sorted()) {
        prop_assert_eq!(dot_product(&v, &v), sum_of_squares(&v));
    }

    #[test]
    fn norm_is_the_root_of_the_self_dot(v in arb_sorted()) {
        prop_assert_eq!(euclidean_norm(&v), dot_product(&v, &v).sqrt());
    }

    #[test]
    fn multiplying_by_one_changes_nothing(v in arb_sorted()) {
        prop_assert_eq!(multiply_scalar(&v, 1.0), v);
    }

    #[test]
    fn identity_transform_changes_nothing(v in arb_sorted()) {
        prop_assert_eq!(transform(&v, |value| value), v);
    }

    #[test]
    fn scalar_operations_preserve_the_keyset(v in arb_sorted(), scalar in -50.0f64..50.0) {
        let keys: Vec<u64> = v.keys().collect();
        prop_assert_eq!(add_scalar(&v, scalar).keys().collect::<Vec<_>>(), keys.clone());
        prop_assert_eq!(multiply_scalar(&v, scalar).keys().collect::<Vec<_>>(), keys);
    }

    #[test]
    fn outputs_are_sorted_even_from_hashed_inputs(entries in arb_entries(), scalar in -50.0f64..50.0) {
        let hashed = HashVector::from_entries(entries);
        let out = add_scalar(&hashed, scalar);
        prop_assert!(out.as_pairs().windows(2).all(|pair| pair[0].0 < pair[1].0));
        prop_assert_eq!(out.len(), hashed.len());
    }
}
