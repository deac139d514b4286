//! Hash-backed sparse vectors.

use std::collections::HashMap;

use super::SparseVector;

/// A sparse vector stored as a hash map from key to value.
///
/// Point lookup is average O(1). Iteration order is arbitrary and there
/// is no sorted backing, so binary operations fall back to probing when
/// one of these is involved.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HashVector {
    entries: HashMap<u64, f64>,
}

impl HashVector {
    /// Create a vector from entries; a repeated key keeps its last value.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (u64, f64)>) -> Self {
        Self { entries: entries.into_iter().collect() }
    }

    /// The empty vector.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the vector has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The value at `key`, or `None` when absent. Average O(1).
    #[must_use]
    pub fn get(&self, key: u64) -> Option<f64> {
        self.entries.get(&key).copied()
    }
}

impl From<HashMap<u64, f64>> for HashVector {
    fn from(entries: HashMap<u64, f64>) -> Self {
        Self { entries }
    }
}

impl FromIterator<(u64, f64)> for HashVector {
    fn from_iter<I: IntoIterator<Item = (u64, f64)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

fn copy_entry<'a>((key, value): (&'a u64, &'a f64)) -> (u64, f64) {
    (*key, *value)
}

impl SparseVector for HashVector {
    type Entries<'a>
        = std::iter::Map<
            std::collections::hash_map::Iter<'a, u64, f64>,
            fn((&'a u64, &'a f64)) -> (u64, f64),
        >
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn get(&self, key: u64) -> Option<f64> {
        HashVector::get(self, key)
    }

    fn entries(&self) -> Self::Entries<'_> {
        self.entries.iter().map(copy_entry)
    }
}
