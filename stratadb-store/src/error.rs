//! Error types for the store crate.

use stratadb_core::{EntityType, ValueKind};
use thiserror::Error;

/// Errors raised while assembling an entity collection.
///
/// Reads never produce these: once built, a collection is infallible to
/// query. Lookup misses and empty scans are ordinary `None`/empty results,
/// not errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An entity was offered to a builder for a different entity type.
    #[error("wrong entity type: expected {expected}, got {actual}")]
    WrongEntityType {
        /// The type the builder was created for.
        expected: EntityType,
        /// The type of the offered entity.
        actual: EntityType,
    },

    /// An entity carries an attribute the schema does not declare.
    #[error("unknown attribute {attribute:?} on entity {id}")]
    UnknownAttribute {
        /// The undeclared attribute name.
        attribute: String,
        /// The id of the offending entity.
        id: u64,
    },

    /// The identity attribute appeared in an entity's value map.
    #[error("identity attribute {attribute:?} must come from the entity id, not its value map")]
    IdentityInValues {
        /// The identity attribute name.
        attribute: String,
    },

    /// A value's kind does not match the kind its attribute declares.
    #[error("type mismatch for attribute {attribute:?} on entity {id}: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The attribute name.
        attribute: String,
        /// The id of the offending entity.
        id: u64,
        /// The kind the schema declares.
        expected: ValueKind,
        /// The kind of the offered value.
        actual: ValueKind,
    },

    /// A required attribute is absent or null on an entity.
    #[error("missing required attribute {attribute:?} on entity {id}")]
    MissingAttribute {
        /// The attribute name.
        attribute: String,
        /// The id of the offending entity.
        id: u64,
    },

    /// Two entities share an id.
    #[error("duplicate entity id {0}")]
    DuplicateId(u64),
}
