//! Integration tests for the StrataDB public API.

use stratadb::algebra::{
    add_scalar, dot_product, euclidean_norm, mean, multiply_scalar, sum, transform,
};
use stratadb::{
    Attribute, AttributeSet, CollectionBuilder, CosineSimilarity, Entity, EntityCollection,
    EntityId, HashVector, SortedArrayVector, SparseVector, Value, ValueKind, VectorSimilarity,
};

// ============================================================================
// Store Scenarios
// ============================================================================

/// ids [1, 3, 7] with ratings [4.0, null, 2.5].
fn rating_collection() -> EntityCollection {
    let schema =
        AttributeSet::of([Attribute::new("rating", ValueKind::Float)]).expect("valid schema");
    let mut builder = CollectionBuilder::new("rating", schema);
    builder
        .add(Entity::new("rating", EntityId::new(1)).with_value("rating", 4.0))
        .expect("valid row");
    builder.add(Entity::new("rating", EntityId::new(3))).expect("valid row");
    builder
        .add(Entity::new("rating", EntityId::new(7)).with_value("rating", 2.5))
        .expect("valid row");
    builder.build().expect("unique ids")
}

#[test]
fn lookup_of_a_row_with_a_null_attribute() {
    let collection = rating_collection();
    let view = collection.lookup(EntityId::new(3)).expect("present id");
    assert!(!view.has_attribute("rating"));
    assert_eq!(view.get("rating"), None);
}

#[test]
fn lookup_of_a_rated_row() {
    let collection = rating_collection();
    let view = collection.lookup(EntityId::new(7)).expect("present id");
    assert_eq!(view.get("rating"), Some(Value::Float(2.5)));
}

#[test]
fn lookup_miss_is_not_found() {
    let collection = rating_collection();
    assert!(collection.lookup(EntityId::new(5)).is_none());
}

#[test]
fn find_returns_exactly_the_matching_entity() {
    let collection = rating_collection();
    let matches = collection.find("rating", &Value::Float(2.5));
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id(), EntityId::new(7));
}

#[test]
fn id_set_is_ascending_and_lookup_agrees_with_it() {
    let collection = rating_collection();
    let ids: Vec<u64> = collection.id_set().iter().collect();
    assert_eq!(ids, vec![1, 3, 7]);

    for (position, id) in collection.id_set().iter().enumerate() {
        let view = collection.lookup(EntityId::new(id)).expect("present id");
        assert_eq!(view.id().as_u64(), id);
        assert_eq!(collection.id_set().key(position), id);
    }
}

// ============================================================================
// Algebra Scenarios
// ============================================================================

#[test]
fn dot_product_and_sums_over_named_vectors() {
    let v1 = SortedArrayVector::new(vec![(1, 2.0), (2, 3.0)]).expect("unique keys");
    let v2 = SortedArrayVector::new(vec![(2, 4.0), (3, 5.0)]).expect("unique keys");

    assert_eq!(dot_product(&v1, &v2), 12.0);
    assert_eq!(sum(&v1), 5.0);
    assert_eq!(euclidean_norm(&v1), 13.0f64.sqrt());
}

#[test]
fn dot_product_is_symmetric_across_representations() {
    let sorted = SortedArrayVector::new(vec![(1, 2.0), (2, 3.0)]).expect("unique keys");
    let hashed = HashVector::from_entries([(2, 4.0), (3, 5.0)]);

    assert_eq!(dot_product(&sorted, &hashed), 12.0);
    assert_eq!(dot_product(&hashed, &sorted), 12.0);
}

#[test]
fn mean_of_an_empty_vector_is_nan() {
    assert!(mean(&SortedArrayVector::empty()).is_nan());
}

#[test]
fn scalar_operations_do_not_commute() {
    let v = SortedArrayVector::new(vec![(1, 2.0), (2, 3.0)]).expect("unique keys");
    let double_then_shift = add_scalar(&multiply_scalar(&v, 2.0), 1.0);
    let shift_then_double = multiply_scalar(&add_scalar(&v, 1.0), 2.0);
    assert_ne!(double_then_shift, shift_then_double);
}

#[test]
fn chained_operations_regain_the_merge_path() {
    // A hashed input comes out of any transform sorted-array-backed.
    let hashed = HashVector::from_entries([(9, 1.0), (1, 2.0), (5, 3.0)]);
    let out = transform(&hashed, |value| value + 1.0);
    assert!(out.sorted_entries().is_some());
    assert_eq!(out.keys().collect::<Vec<_>>(), vec![1, 5, 9]);
}

// ============================================================================
// Store + Algebra Together
// ============================================================================

#[test]
fn affinity_between_entity_derived_vectors() {
    let collection = rating_collection();

    // One vector keyed by entity id, one synthetic reference vector.
    let rated: SortedArrayVector = SortedArrayVector::new(
        collection
            .iter()
            .filter_map(|view| {
                view.get("rating").and_then(|value| value.as_float()).map(|rating| {
                    (view.id().as_u64(), rating)
                })
            })
            .collect(),
    )
    .expect("ids are unique");

    assert_eq!(rated.len(), 2);
    assert_eq!(rated.get(1), Some(4.0));
    assert_eq!(rated.get(7), Some(2.5));

    let cosine = CosineSimilarity::new();
    let self_affinity = cosine.similarity(&rated, &rated);
    assert!((self_affinity - 1.0).abs() < 1e-12);

    let disjoint = SortedArrayVector::new(vec![(2, 1.0)]).expect("unique keys");
    assert_eq!(cosine.similarity(&rated, &disjoint), 0.0);
}
