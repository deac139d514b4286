//! `StrataDB`
//!
//! An in-memory, immutable, columnar store for typed domain entities,
//! paired with a sparse vector algebra library for computing proximity
//! between entities.
//!
//! # Features
//!
//! - **Columnar storage**: one null-aware column per attribute, addressed
//!   by dense position; no per-row objects are ever materialized eagerly
//! - **Indexed lookup**: O(log n) primary-key lookup through a sorted id
//!   column; O(n) attribute-predicate scans
//! - **Lazy views**: lookups and scans hand out O(1) view handles that
//!   resolve attribute reads through the columns on demand
//! - **Sparse vector algebra**: sums, norms, dot products, and scalar or
//!   functional transforms, with a linear merge fast path when both
//!   operands are sorted-array-backed
//!
//! Collections are built once, handed to readers as read-only, and never
//! mutated; everything here is safe to share across threads without
//! coordination.
//!
//! # Example
//!
//! ```
//! use stratadb::{
//!     algebra, Attribute, AttributeSet, CollectionBuilder, Entity, EntityId,
//!     SortedArrayVector, ValueKind,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Build an immutable collection of rated items.
//! let schema = AttributeSet::of([Attribute::new("rating", ValueKind::Float)])?;
//! let mut builder = CollectionBuilder::new("rating", schema);
//! builder.add(Entity::new("rating", EntityId::new(1)).with_value("rating", 4.0))?;
//! builder.add(Entity::new("rating", EntityId::new(7)).with_value("rating", 2.5))?;
//! let ratings = builder.build()?;
//!
//! let view = ratings.lookup(EntityId::new(7)).expect("present id");
//! assert_eq!(view.get("rating"), Some(2.5.into()));
//! assert!(ratings.lookup(EntityId::new(5)).is_none());
//!
//! // Compute affinity between two sparse vectors.
//! let v1 = SortedArrayVector::new(vec![(1, 2.0), (2, 3.0)])?;
//! let v2 = SortedArrayVector::new(vec![(2, 4.0), (3, 5.0)])?;
//! assert_eq!(algebra::dot_product(&v1, &v2), 12.0);
//! # Ok(())
//! # }
//! ```

// Re-export core types
pub use stratadb_core::{
    Attribute, AttributeSet, AttributeValue, CoreError, Entity, EntityId, EntityType,
    TypedAttribute, Value, ValueKind,
};

// Re-export storage types
pub use stratadb_store::{
    CollectionBuilder, ColumnStore, EntityCollection, EntityIter, EntityView, NullMask,
    SortedKeyIndex, StoreError,
};
pub use stratadb_store::search;

// Re-export the vector algebra
pub use stratadb_vector::algebra;
pub use stratadb_vector::{
    CosineSimilarity, DefaultedLookup, DotProductSimilarity, HashVector, SortedArrayVector,
    SparseVector, VectorError, VectorSimilarity,
};
