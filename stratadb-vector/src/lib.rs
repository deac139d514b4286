//! `StrataDB` Vector
//!
//! An independent numeric library over sparse `u64 → f64` vectors, used to
//! compute proximity between entities (a rating vector keyed by item id,
//! for example).
//!
//! Two representation families back one abstraction: sorted-array-backed
//! vectors support linear merge algorithms, hash-backed ones give O(1)
//! point lookup. The operations in [`algebra`] accept any mix and pick
//! their algorithm per call — a two-cursor merge when both operands are
//! sorted, a probe of the larger operand otherwise. Every vector-producing
//! operation emits a fresh sorted-array-backed vector, so chained
//! operations regain the merge path automatically.
//!
//! # Modules
//!
//! - [`types`] - the [`SparseVector`] abstraction and its representations
//! - [`algebra`] - sums, norms, dot products, scalar and functional
//!   transforms
//! - [`similarity`] - pluggable proximity metrics built on the algebra
//! - [`error`] - error types

pub mod algebra;
pub mod error;
pub mod similarity;
pub mod types;

#[cfg(test)]
mod proptest_tests;

pub use algebra::DefaultedLookup;
pub use error::VectorError;
pub use similarity::{CosineSimilarity, DotProductSimilarity, VectorSimilarity};
pub use types::{HashVector, SortedArrayVector, SparseVector};
