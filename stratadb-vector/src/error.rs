//! Error types for the vector crate.

use thiserror::Error;

/// Errors that can occur when constructing sparse vectors.
#[derive(Debug, Error)]
pub enum VectorError {
    /// Two entries share a key; sparse vector keys must be unique.
    #[error("duplicate key {0} in sparse vector")]
    DuplicateKey(u64),
}
