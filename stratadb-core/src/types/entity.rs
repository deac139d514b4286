//! Materialized entity rows.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{EntityId, EntityType, Value};

/// An owned, fully materialized entity row.
///
/// Collections hand out lazy views over their columns; `Entity` is the
/// eager counterpart, used as input to a collection builder and produced
/// when a caller materializes a view that must outlive the collection
/// borrow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier for this entity.
    pub id: EntityId,
    /// The schema/category this row belongs to.
    pub entity_type: EntityType,
    /// Attribute values keyed by attribute name.
    ///
    /// The identity attribute lives in `id`, never in this map.
    pub values: HashMap<String, Value>,
}

impl Entity {
    /// Create a new entity of the given type and id, with no attribute
    /// values.
    #[must_use]
    pub fn new(entity_type: impl Into<EntityType>, id: EntityId) -> Self {
        Self { id, entity_type: entity_type.into(), values: HashMap::new() }
    }

    /// Add an attribute value to this entity.
    #[must_use]
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Get an attribute value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Whether this entity carries a non-null value for the named
    /// attribute.
    #[must_use]
    pub fn has_value(&self, name: &str) -> bool {
        self.values.get(name).is_some_and(|value| !value.is_null())
    }
}
