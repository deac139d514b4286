//! Rank users by rating affinity.
//!
//! Builds an immutable collection of (user, item, rating) rows, derives a
//! sparse rating vector per user keyed by item id, and ranks every other
//! user by cosine affinity to the first.
//!
//! Run with: `cargo run --example affinity`

use stratadb::{
    Attribute, AttributeSet, CollectionBuilder, CosineSimilarity, Entity, EntityCollection,
    EntityId, SortedArrayVector, TypedAttribute, ValueKind, VectorSimilarity,
};

fn ratings() -> Result<EntityCollection, Box<dyn std::error::Error>> {
    let schema = AttributeSet::of([
        Attribute::new("user", ValueKind::Int).required(),
        Attribute::new("item", ValueKind::Int).required(),
        Attribute::new("rating", ValueKind::Float).required(),
    ])?;

    let rows: &[(u64, i64, i64, f64)] = &[
        // (rating id, user, item, rating)
        (1, 100, 1, 4.5),
        (2, 100, 2, 3.0),
        (3, 100, 4, 5.0),
        (4, 200, 1, 4.0),
        (5, 200, 2, 3.5),
        (6, 200, 3, 2.0),
        (7, 300, 3, 4.0),
        (8, 300, 5, 1.5),
    ];

    let mut builder = CollectionBuilder::new("rating", schema);
    for &(id, user, item, rating) in rows {
        builder.add(
            Entity::new("rating", EntityId::new(id))
                .with_value("user", user)
                .with_value("item", item)
                .with_value("rating", rating),
        )?;
    }
    Ok(builder.build()?)
}

/// The user's ratings as a sparse vector keyed by item id.
fn user_vector(
    collection: &EntityCollection,
    user: i64,
) -> Result<SortedArrayVector, Box<dyn std::error::Error>> {
    let user_attr: TypedAttribute<i64> = TypedAttribute::new("user");
    let item_attr: TypedAttribute<i64> = TypedAttribute::new("item");
    let rating_attr: TypedAttribute<f64> = TypedAttribute::new("rating");

    let mut entries = Vec::new();
    for view in collection.find_typed(&user_attr, user) {
        let item = view.get_typed(&item_attr).expect("item is required");
        let rating = view.get_typed(&rating_attr).expect("rating is required");
        entries.push((item as u64, rating));
    }
    Ok(SortedArrayVector::new(entries)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let collection = ratings()?;
    println!("{} ratings stored", collection.len());

    let users = [100i64, 200, 300];
    let anchor = user_vector(&collection, users[0])?;
    let cosine = CosineSimilarity::new();

    let mut scored: Vec<(i64, f64)> = users[1..]
        .iter()
        .map(|&user| {
            let vector = user_vector(&collection, user).expect("known user");
            (user, cosine.similarity(&anchor, &vector))
        })
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    println!("affinity to user {}:", users[0]);
    for (user, score) in scored {
        println!("  user {user}: {score:.3}");
    }

    Ok(())
}
