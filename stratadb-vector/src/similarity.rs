//! Similarity metrics over sparse vectors.
//!
//! Metrics fold two vectors to an affinity score using the arithmetic in
//! [`crate::algebra`]. Choosing a metric for a given consumer, and any
//! normalization of the resulting scores, stays with the consumer.

use crate::algebra::{dot_product, euclidean_norm};
use crate::types::SparseVector;

/// A pluggable proximity metric between two sparse vectors.
pub trait VectorSimilarity {
    /// The affinity score between `v1` and `v2`.
    fn similarity<A, B>(&self, v1: &A, v2: &B) -> f64
    where
        A: SparseVector + ?Sized,
        B: SparseVector + ?Sized;

    /// Whether the metric depends only on keys present in both vectors.
    fn is_sparse(&self) -> bool;

    /// Whether `similarity(a, b) == similarity(b, a)` for all inputs.
    fn is_symmetric(&self) -> bool;
}

/// Damped cosine similarity.
///
/// The score is `dot(v1, v2) / (‖v1‖·‖v2‖ + damping)`. With no damping
/// the range is [-1, 1]; a positive damping term shrinks scores computed
/// from little data toward zero. A zero denominator scores 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CosineSimilarity {
    damping: f64,
}

impl CosineSimilarity {
    /// Undamped cosine similarity.
    #[must_use]
    pub const fn new() -> Self {
        Self { damping: 0.0 }
    }

    /// Cosine similarity with `damping` added to the norm product.
    #[must_use]
    pub const fn damped(damping: f64) -> Self {
        Self { damping }
    }

    /// The damping term.
    #[must_use]
    pub const fn damping(&self) -> f64 {
        self.damping
    }
}

impl VectorSimilarity for CosineSimilarity {
    fn similarity<A, B>(&self, v1: &A, v2: &B) -> f64
    where
        A: SparseVector + ?Sized,
        B: SparseVector + ?Sized,
    {
        let denominator = euclidean_norm(v1) * euclidean_norm(v2) + self.damping;
        if denominator == 0.0 {
            return 0.0;
        }
        dot_product(v1, v2) / denominator
    }

    fn is_sparse(&self) -> bool {
        true
    }

    fn is_symmetric(&self) -> bool {
        true
    }
}

/// Raw dot-product similarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DotProductSimilarity;

impl VectorSimilarity for DotProductSimilarity {
    fn similarity<A, B>(&self, v1: &A, v2: &B) -> f64
    where
        A: SparseVector + ?Sized,
        B: SparseVector + ?Sized,
    {
        dot_product(v1, v2)
    }

    fn is_sparse(&self) -> bool {
        true
    }

    fn is_symmetric(&self) -> bool {
        true
    }
}
