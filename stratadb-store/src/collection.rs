//! Immutable columnar entity collections with lazy row views.

use stratadb_core::{
    AttributeSet, AttributeValue, Entity, EntityId, EntityType, TypedAttribute, Value,
};

use crate::column::ColumnStore;
use crate::index::SortedKeyIndex;

/// The full row set for one entity type: a sorted id column plus one
/// column store per non-identity attribute, all of identical length.
///
/// A collection is immutable once constructed; every operation is a pure
/// read over the backing columns, so any number of callers may look up,
/// scan, and iterate the same instance concurrently without coordination.
/// Lookup is O(log n) through the key index; attribute scans are O(n) in
/// position order. Neither materializes rows — both hand out
/// [`EntityView`]s that read through the columns on demand.
#[derive(Debug, Clone)]
pub struct EntityCollection {
    entity_type: EntityType,
    attributes: AttributeSet,
    ids: SortedKeyIndex,
    columns: Vec<ColumnStore>,
}

impl EntityCollection {
    /// Assemble a collection from prebuilt parts.
    ///
    /// `columns[k]` backs schema attribute `k + 1`; the identity attribute
    /// is backed by `ids` itself, which every other column mirrors
    /// positionally. The parts are trusted to satisfy the construction
    /// invariants — ids strictly ascending and unique, every column
    /// exactly `ids.len()` long, column kinds matching the schema — and
    /// are checked only under `debug_assertions`. Use
    /// [`CollectionBuilder`](crate::CollectionBuilder) for the validated
    /// path.
    #[must_use]
    pub fn new(
        entity_type: EntityType,
        attributes: AttributeSet,
        ids: SortedKeyIndex,
        columns: Vec<ColumnStore>,
    ) -> Self {
        debug_assert_eq!(columns.len() + 1, attributes.len());
        debug_assert!(columns.iter().all(|column| column.len() == ids.len()));
        Self { entity_type, attributes, ids, columns }
    }

    /// The entity type stored here.
    #[must_use]
    pub fn entity_type(&self) -> &EntityType {
        &self.entity_type
    }

    /// The schema the columns are laid out against.
    #[must_use]
    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    /// Number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the collection holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// All ids in ascending order — a borrowed view over the key index,
    /// not a copy.
    #[must_use]
    pub fn id_set(&self) -> &SortedKeyIndex {
        &self.ids
    }

    /// Look up an entity by id.
    ///
    /// Binary search over the id column; O(log n). A miss is `None`, never
    /// an error. The returned view is constructed lazily in O(1).
    #[must_use]
    pub fn lookup(&self, id: EntityId) -> Option<EntityView<'_>> {
        let position = self.ids.position_of(id.as_u64())?;
        Some(EntityView { owner: self, position })
    }

    /// Every entity whose value for `attribute` equals `value`, in
    /// position order.
    ///
    /// A full linear scan comparing by value-equality. An attribute the
    /// schema does not declare, like a value no row carries, yields an
    /// empty result rather than an error.
    #[must_use]
    pub fn find(&self, attribute: &str, value: &Value) -> Vec<EntityView<'_>> {
        let Some(index) = self.attributes.lookup(attribute) else {
            return Vec::new();
        };
        self.iter().filter(|view| view.value_at(index).as_ref() == Some(value)).collect()
    }

    /// Typed variant of [`EntityCollection::find`].
    #[must_use]
    pub fn find_typed<T: AttributeValue>(
        &self,
        attribute: &TypedAttribute<T>,
        value: T,
    ) -> Vec<EntityView<'_>> {
        self.find(attribute.name(), &value.into_value())
    }

    /// Iterate lazy views in position order.
    ///
    /// The traversal is finite and restartable: every call returns a fresh
    /// iterator with its own cursor, sharing no state with any other.
    #[must_use]
    pub fn iter(&self) -> EntityIter<'_> {
        EntityIter { owner: self, position: 0 }
    }

    /// The backing column for a non-identity attribute.
    ///
    /// `None` for the identity attribute — backed by the key index — and
    /// for names the schema does not declare.
    #[must_use]
    pub fn column_for(&self, attribute: &str) -> Option<&ColumnStore> {
        match self.attributes.lookup(attribute)? {
            0 => None,
            index => Some(&self.columns[index - 1]),
        }
    }
}

impl<'a> IntoIterator for &'a EntityCollection {
    type Item = EntityView<'a>;
    type IntoIter = EntityIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazily resolving handle to one row of a collection.
///
/// A view is just a collection reference paired with a position: it owns
/// no column data, costs O(1) to construct, and resolves every attribute
/// read through the owning collection's columns on demand. It borrows the
/// collection — a view meant to outlive the borrow must be copied out
/// with [`EntityView::materialize`].
#[derive(Debug, Clone, Copy)]
pub struct EntityView<'a> {
    owner: &'a EntityCollection,
    position: usize,
}

impl<'a> EntityView<'a> {
    /// This entity's id.
    #[must_use]
    pub fn id(&self) -> EntityId {
        EntityId::new(self.owner.ids.key(self.position))
    }

    /// The value of `attribute` at this row; `None` when the schema does
    /// not declare the attribute or the row is null there. O(1).
    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<Value> {
        let index = self.owner.attributes.lookup(attribute)?;
        self.value_at(index)
    }

    /// Typed read through a [`TypedAttribute`] key.
    #[must_use]
    pub fn get_typed<T: AttributeValue>(&self, attribute: &TypedAttribute<T>) -> Option<T> {
        T::from_value(&self.get(attribute.name())?)
    }

    /// Whether this row carries a non-null value for `attribute`.
    ///
    /// A schema name lookup followed by a null check; an unknown name is
    /// `false`, never an error.
    #[must_use]
    pub fn has_attribute(&self, attribute: &str) -> bool {
        match self.owner.attributes.lookup(attribute) {
            Some(0) => true,
            Some(index) => !self.owner.columns[index - 1].is_null(self.position),
            None => false,
        }
    }

    /// Names of the attributes present (non-null) at this row, in schema
    /// order. Scans every column at this position.
    ///
    /// # Panics
    ///
    /// Panics if an attribute the schema declares required reports null
    /// here. No operation of this crate's builder can produce that state;
    /// it means the backing columns were corrupted upstream, and partial
    /// data must not be returned in its place.
    #[must_use]
    pub fn present_attributes(&self) -> Vec<&'a str> {
        let mut present = Vec::with_capacity(self.owner.attributes.len());
        for (index, attribute) in self.owner.attributes.iter().enumerate() {
            let null = index > 0 && self.owner.columns[index - 1].is_null(self.position);
            if !null {
                present.push(attribute.name());
            } else if attribute.is_required() {
                panic!(
                    "required attribute {:?} is null at position {}: collection corrupted",
                    attribute.name(),
                    self.position
                );
            }
        }
        present
    }

    /// Copy this row out of the collection as an owned [`Entity`].
    #[must_use]
    pub fn materialize(&self) -> Entity {
        let mut entity = Entity::new(self.owner.entity_type.clone(), self.id());
        for (index, attribute) in self.owner.attributes.iter().enumerate().skip(1) {
            if let Some(value) = self.owner.columns[index - 1].get(self.position) {
                entity = entity.with_value(attribute.name(), value);
            }
        }
        entity
    }

    /// The value backing schema attribute `index` at this row.
    fn value_at(&self, index: usize) -> Option<Value> {
        if index == 0 {
            Some(Value::Id(self.id()))
        } else {
            self.owner.columns[index - 1].get(self.position)
        }
    }
}

/// Position-order iterator of lazy views.
///
/// Carries only the owner reference and a private cursor; iterators from
/// separate [`EntityCollection::iter`] calls are fully independent.
#[derive(Debug)]
pub struct EntityIter<'a> {
    owner: &'a EntityCollection,
    position: usize,
}

impl<'a> Iterator for EntityIter<'a> {
    type Item = EntityView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.owner.len() {
            return None;
        }
        let view = EntityView { owner: self.owner, position: self.position };
        self.position += 1;
        Some(view)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.owner.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for EntityIter<'_> {}

#[cfg(test)]
mod tests {
    use stratadb_core::{Attribute, ValueKind};

    use super::*;
    use crate::column::ColumnStore;

    /// ids [1, 3, 7] with ratings [4.0, null, 2.5].
    fn rating_collection() -> EntityCollection {
        let attributes = AttributeSet::of([Attribute::new("rating", ValueKind::Float)]).unwrap();
        let ids = SortedKeyIndex::from_sorted(vec![1, 3, 7]);
        let mut rating = ColumnStore::new(ValueKind::Float);
        rating.push(&Value::Float(4.0));
        rating.push(&Value::Null);
        rating.push(&Value::Float(2.5));
        EntityCollection::new(EntityType::new("rating"), attributes, ids, vec![rating])
    }

    #[test]
    fn lookup_hit_and_miss() {
        let collection = rating_collection();
        assert_eq!(collection.len(), 3);

        let hit = collection.lookup(EntityId::new(7)).unwrap();
        assert_eq!(hit.id(), EntityId::new(7));
        assert_eq!(hit.get("rating"), Some(Value::Float(2.5)));

        assert!(collection.lookup(EntityId::new(5)).is_none());
    }

    #[test]
    fn null_attribute_is_absent() {
        let collection = rating_collection();
        let view = collection.lookup(EntityId::new(3)).unwrap();
        assert!(!view.has_attribute("rating"));
        assert_eq!(view.get("rating"), None);
        assert_eq!(view.present_attributes(), vec!["id"]);
    }

    #[test]
    fn unknown_attribute_is_false_not_an_error() {
        let collection = rating_collection();
        let view = collection.lookup(EntityId::new(1)).unwrap();
        assert!(!view.has_attribute("color"));
        assert_eq!(view.get("color"), None);
    }

    #[test]
    fn identity_attribute_reads_from_the_key_index() {
        let collection = rating_collection();
        let view = collection.lookup(EntityId::new(3)).unwrap();
        assert!(view.has_attribute("id"));
        assert_eq!(view.get("id"), Some(Value::Id(EntityId::new(3))));
        assert!(collection.column_for("id").is_none());
    }

    #[test]
    fn find_by_value_equality() {
        let collection = rating_collection();
        let matches = collection.find("rating", &Value::Float(2.5));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id(), EntityId::new(7));

        assert!(collection.find("rating", &Value::Float(9.9)).is_empty());
        assert!(collection.find("unknown", &Value::Float(2.5)).is_empty());
    }

    #[test]
    fn find_typed() {
        let collection = rating_collection();
        let rating: TypedAttribute<f64> = TypedAttribute::new("rating");
        let matches = collection.find_typed(&rating, 4.0);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id(), EntityId::new(1));
        assert_eq!(matches[0].get_typed(&rating), Some(4.0));
    }

    #[test]
    fn iteration_is_positional_and_restartable() {
        let collection = rating_collection();
        let first: Vec<EntityId> = collection.iter().map(|view| view.id()).collect();
        let second: Vec<EntityId> = (&collection).into_iter().map(|view| view.id()).collect();
        assert_eq!(first, vec![EntityId::new(1), EntityId::new(3), EntityId::new(7)]);
        assert_eq!(first, second);
        assert_eq!(collection.iter().len(), 3);
    }

    #[test]
    fn view_reads_match_the_backing_column() {
        let collection = rating_collection();
        let column = collection.column_for("rating").unwrap();
        for (position, view) in collection.iter().enumerate() {
            assert_eq!(view.get("rating"), column.get(position));
            assert_eq!(!view.has_attribute("rating"), column.is_null(position));
        }
    }

    #[test]
    fn materialize_copies_the_row_out() {
        let collection = rating_collection();
        let entity = collection.lookup(EntityId::new(7)).unwrap().materialize();
        assert_eq!(entity.id, EntityId::new(7));
        assert_eq!(entity.get("rating"), Some(&Value::Float(2.5)));

        let sparse = collection.lookup(EntityId::new(3)).unwrap().materialize();
        assert_eq!(sparse.get("rating"), None);
    }

    #[test]
    #[should_panic(expected = "collection corrupted")]
    fn required_null_is_an_invariant_violation() {
        let attributes =
            AttributeSet::of([Attribute::new("rating", ValueKind::Float).required()]).unwrap();
        let ids = SortedKeyIndex::from_sorted(vec![1]);
        let mut rating = ColumnStore::new(ValueKind::Float);
        rating.push(&Value::Null);
        let collection =
            EntityCollection::new(EntityType::new("rating"), attributes, ids, vec![rating]);

        let view = collection.lookup(EntityId::new(1)).unwrap();
        let _ = view.present_attributes();
    }

    #[test]
    fn empty_collection() {
        let attributes = AttributeSet::of([Attribute::new("rating", ValueKind::Float)]).unwrap();
        let collection = EntityCollection::new(
            EntityType::new("rating"),
            attributes,
            SortedKeyIndex::from_sorted(Vec::new()),
            vec![ColumnStore::new(ValueKind::Float)],
        );
        assert!(collection.is_empty());
        assert!(collection.lookup(EntityId::new(1)).is_none());
        assert_eq!(collection.iter().count(), 0);
    }
}
