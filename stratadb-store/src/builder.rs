//! Validated construction of entity collections.

use stratadb_core::{AttributeSet, Entity, EntityType, Value};

use crate::collection::EntityCollection;
use crate::column::ColumnStore;
use crate::error::StoreError;
use crate::index::SortedKeyIndex;

/// Accumulates entities and hands them off as an immutable
/// [`EntityCollection`].
///
/// The builder owns all the validation the collection itself assumes
/// away: entity types must match, value kinds must match the schema,
/// required attributes must be present, ids must be unique. Rows may be
/// staged in any order; [`CollectionBuilder::build`] sorts them by id
/// before freezing the columns, so the collection's sortedness
/// precondition always holds on this path.
#[derive(Debug)]
pub struct CollectionBuilder {
    entity_type: EntityType,
    attributes: AttributeSet,
    rows: Vec<Entity>,
}

impl CollectionBuilder {
    /// Create a builder for the given entity type and schema.
    #[must_use]
    pub fn new(entity_type: impl Into<EntityType>, attributes: AttributeSet) -> Self {
        Self { entity_type: entity_type.into(), attributes, rows: Vec::new() }
    }

    /// Stage one entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity's type differs from the builder's,
    /// if it carries an attribute the schema does not declare (or restates
    /// the identity attribute in its value map), if a value's kind differs
    /// from the declared kind, or if a required attribute is absent or
    /// null.
    pub fn add(&mut self, entity: Entity) -> Result<(), StoreError> {
        if entity.entity_type != self.entity_type {
            return Err(StoreError::WrongEntityType {
                expected: self.entity_type.clone(),
                actual: entity.entity_type,
            });
        }

        for (name, value) in &entity.values {
            let found = self.attributes.iter().enumerate().find(|(_, attr)| attr.name() == name);
            let Some((index, declared)) = found else {
                return Err(StoreError::UnknownAttribute {
                    attribute: name.clone(),
                    id: entity.id.as_u64(),
                });
            };
            if index == 0 {
                return Err(StoreError::IdentityInValues { attribute: name.clone() });
            }
            if let Some(actual) = value.kind() {
                if actual != declared.kind() {
                    return Err(StoreError::TypeMismatch {
                        attribute: name.clone(),
                        id: entity.id.as_u64(),
                        expected: declared.kind(),
                        actual,
                    });
                }
            }
        }

        for attribute in self.attributes.iter().skip(1) {
            if attribute.is_required() && !entity.has_value(attribute.name()) {
                return Err(StoreError::MissingAttribute {
                    attribute: attribute.name().to_owned(),
                    id: entity.id.as_u64(),
                });
            }
        }

        self.rows.push(entity);
        Ok(())
    }

    /// Number of staged rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no rows are staged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sort the staged rows by id, freeze them into columns, and hand the
    /// result off as an immutable collection.
    ///
    /// # Errors
    ///
    /// Returns an error if two staged entities share an id.
    pub fn build(mut self) -> Result<EntityCollection, StoreError> {
        self.rows.sort_by_key(|entity| entity.id.as_u64());
        for pair in self.rows.windows(2) {
            if pair[0].id == pair[1].id {
                return Err(StoreError::DuplicateId(pair[0].id.as_u64()));
            }
        }

        let ids =
            SortedKeyIndex::from_sorted(self.rows.iter().map(|entity| entity.id.as_u64()).collect());

        let mut columns: Vec<ColumnStore> = self
            .attributes
            .iter()
            .skip(1)
            .map(|attribute| ColumnStore::with_capacity(attribute.kind(), self.rows.len()))
            .collect();

        for entity in &self.rows {
            for (index, attribute) in self.attributes.iter().enumerate().skip(1) {
                match entity.get(attribute.name()) {
                    Some(value) => columns[index - 1].push(value),
                    None => columns[index - 1].push(&Value::Null),
                }
            }
        }

        Ok(EntityCollection::new(self.entity_type, self.attributes, ids, columns))
    }
}
