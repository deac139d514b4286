//! Numeric operations over sparse vectors.
//!
//! Representation-agnostic in result, representation-aware in algorithm:
//! when both operands of [`dot_product`] expose a sorted-array backing,
//! the common keys are found by a linear two-cursor merge; otherwise the
//! smaller operand is iterated and the larger one probed through a
//! zero-default [`DefaultedLookup`]. Either way accumulation proceeds in
//! ascending key order, so a result never depends on which side an
//! argument arrived on.
//!
//! Every vector-producing operation emits a fresh [`SortedArrayVector`],
//! so chained operations regain the merge path regardless of input
//! representation. No operation mutates an input.

use std::cmp::Ordering;

use crate::types::{SortedArrayVector, SparseVector};

/// Sum of all values; 0.0 for an empty vector.
#[must_use]
pub fn sum<V: SparseVector + ?Sized>(v: &V) -> f64 {
    v.entries().map(|(_, value)| value).sum()
}

/// Sum of the absolute values; 0.0 for an empty vector.
#[must_use]
pub fn sum_abs<V: SparseVector + ?Sized>(v: &V) -> f64 {
    v.entries().map(|(_, value)| value.abs()).sum()
}

/// Sum of the squared values; 0.0 for an empty vector.
#[must_use]
pub fn sum_of_squares<V: SparseVector + ?Sized>(v: &V) -> f64 {
    v.entries().map(|(_, value)| value * value).sum()
}

/// Euclidean (L2) norm: the square root of [`sum_of_squares`].
#[must_use]
pub fn euclidean_norm<V: SparseVector + ?Sized>(v: &V) -> f64 {
    sum_of_squares(v).sqrt()
}

/// Arithmetic mean of the values.
///
/// The mean of an empty vector is NaN (`0.0 / 0`), left to propagate
/// rather than masked; callers needing a guard should check
/// [`SparseVector::is_empty`] first.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean<V: SparseVector + ?Sized>(v: &V) -> f64 {
    sum(v) / v.len() as f64
}

/// Dot product of two sparse vectors.
///
/// A key missing from either side contributes 0, so this is the sum of
/// `v1[k] * v2[k]` over keys present in both. Symmetric in its arguments,
/// including under floating-point summation order.
///
/// When both operands are sorted-array-backed the common keys are found
/// by a linear two-cursor merge in O(n1 + n2): the cursor at the smaller
/// key advances, and on a match both do after accumulating. Otherwise the
/// smaller operand's entries are walked in key order and the larger
/// operand is probed through a zero-default lookup, O(min·log min +
/// min·probe), whichever order the arguments came in.
#[must_use]
pub fn dot_product<A, B>(v1: &A, v2: &B) -> f64
where
    A: SparseVector + ?Sized,
    B: SparseVector + ?Sized,
{
    if let (Some(s1), Some(s2)) = (v1.sorted_entries(), v2.sorted_entries()) {
        merge_dot(s1, s2)
    } else if v1.len() <= v2.len() {
        probe_dot(v1, v2)
    } else {
        probe_dot(v2, v1)
    }
}

/// Merge walk over two ascending key sequences.
fn merge_dot(a: &[(u64, f64)], b: &[(u64, f64)]) -> f64 {
    let mut result = 0.0;
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        let (key_a, value_a) = a[i];
        let (key_b, value_b) = b[j];

        match key_a.cmp(&key_b) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                result += value_a * value_b;
                i += 1;
                j += 1;
            }
        }
    }

    result
}

/// Walk `smaller` in ascending key order, probing `larger` with a zero
/// default. The sort pins the summation order down so the probe path
/// stays symmetric and agrees with the merge path bit for bit.
fn probe_dot<A, B>(smaller: &A, larger: &B) -> f64
where
    A: SparseVector + ?Sized,
    B: SparseVector + ?Sized,
{
    let mut entries: Vec<(u64, f64)> = smaller.entries().collect();
    entries.sort_unstable_by_key(|&(key, _)| key);

    let lookup = DefaultedLookup::new(larger, 0.0);
    let mut result = 0.0;
    for (key, value) in entries {
        // absent keys read as zero, contributing nothing
        result += value * lookup.get(key);
    }
    result
}

/// Add `scalar` to every value. Fresh sorted output over the identical
/// keyset.
#[must_use]
pub fn add_scalar<V: SparseVector + ?Sized>(v: &V, scalar: f64) -> SortedArrayVector {
    map_values(v, |value| value + scalar)
}

/// Multiply every value by `scalar`. Fresh sorted output over the
/// identical keyset — multiplying by zero zeroes the values but removes
/// no keys.
#[must_use]
pub fn multiply_scalar<V: SparseVector + ?Sized>(v: &V, scalar: f64) -> SortedArrayVector {
    map_values(v, |value| value * scalar)
}

/// Replace every value with `f(value)`. Fresh sorted output over the
/// identical keyset; `f` may be any total numeric function.
#[must_use]
pub fn transform<V, F>(v: &V, f: F) -> SortedArrayVector
where
    V: SparseVector + ?Sized,
    F: Fn(f64) -> f64,
{
    map_values(v, f)
}

/// Collect a vector's entries in ascending key order and apply `f` to
/// each value.
fn map_values<V, F>(v: &V, f: F) -> SortedArrayVector
where
    V: SparseVector + ?Sized,
    F: Fn(f64) -> f64,
{
    let mut entries: Vec<(u64, f64)> = match v.sorted_entries() {
        Some(sorted) => sorted.to_vec(),
        None => {
            let mut collected: Vec<(u64, f64)> = v.entries().collect();
            collected.sort_unstable_by_key(|&(key, _)| key);
            collected
        }
    };
    for entry in &mut entries {
        entry.1 = f(entry.1);
    }
    SortedArrayVector::from_sorted(entries)
}

/// Read-only decorator reporting a chosen default for absent keys.
///
/// Captures only the delegate reference and the default value, so one is
/// cheap to construct per call and copies none of the underlying data.
/// It exposes no mutating API: writes through the adapter are impossible
/// rather than rejected at runtime.
#[derive(Debug, Clone, Copy)]
pub struct DefaultedLookup<'a, V: ?Sized> {
    delegate: &'a V,
    default: f64,
}

impl<'a, V: SparseVector + ?Sized> DefaultedLookup<'a, V> {
    /// Wrap `delegate` so absent keys report `default` instead of a
    /// representation-specific miss.
    #[must_use]
    pub const fn new(delegate: &'a V, default: f64) -> Self {
        Self { delegate, default }
    }

    /// The value at `key`, or the default when absent.
    #[must_use]
    pub fn get(&self, key: u64) -> f64 {
        self.delegate.get(key).unwrap_or(self.default)
    }

    /// Whether the underlying vector has an entry at `key`; the default
    /// does not count as one.
    #[must_use]
    pub fn contains_key(&self, key: u64) -> bool {
        self.delegate.contains_key(key)
    }

    /// The default reported for absent keys.
    #[must_use]
    pub const fn default_value(&self) -> f64 {
        self.default
    }

    /// Entry count of the underlying vector.
    #[must_use]
    pub fn len(&self) -> usize {
        self.delegate.len()
    }

    /// Whether the underlying vector is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.delegate.is_empty()
    }
}
