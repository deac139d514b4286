//! `StrataDB` Store
//!
//! Columnar, immutable, in-memory storage for typed domain entities.
//!
//! A collection holds one sorted id column and one column store per schema
//! attribute, all of identical length; position `i` in every column refers
//! to the same logical entity. Rows are never materialized eagerly —
//! lookups and scans hand out lazy views that resolve attribute reads
//! through the columns on demand.
//!
//! # Modules
//!
//! - [`column`] - positional, null-aware storage for one attribute
//! - [`index`] - the sorted identity column
//! - [`search`] - the generic monotonic-range binary search
//! - [`collection`] - lookup, scan, and iteration over lazy views
//! - [`builder`] - the validated construction path
//! - [`error`] - error types

pub mod builder;
pub mod collection;
pub mod column;
pub mod error;
pub mod index;
pub mod search;

pub use builder::CollectionBuilder;
pub use collection::{EntityCollection, EntityIter, EntityView};
pub use column::{ColumnStore, NullMask};
pub use error::StoreError;
pub use index::SortedKeyIndex;
