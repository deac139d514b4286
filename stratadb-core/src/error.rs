//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur in the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A schema failed structural validation.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    /// Two attribute descriptors in one schema share a name.
    #[error("duplicate attribute {0:?} in schema")]
    DuplicateAttribute(String),
}
