mod common;

use chrono::Utc;
use recipe_share_api::{
    error::AppError,
    membership::{CollectionMembership, ensure_owner},
    models::EmbeddedCollection,
};
use uuid::Uuid;

fn embedded(name: &str) -> EmbeddedCollection {
    EmbeddedCollection {
        id: Uuid::new_v4(),
        name: name.to_string(),
        recipes: Vec::new(),
        created_at: Utc::now(),
    }
}

#[test]
fn duplicate_favorite_is_a_conflict() {
    let mut user = common::user();
    let recipe_id = Uuid::new_v4();

    user.favorites_mut().add_recipe(recipe_id).expect("first add");
    let err = user.favorites_mut().add_recipe(recipe_id).unwrap_err();

    assert!(matches!(err, AppError::Conflict(ref msg) if msg == "Recipe already in favorites"));
    assert_eq!(user.favorites, vec![recipe_id]);
}

#[test]
fn removing_twice_is_idempotent() {
    let mut user = common::user();
    let recipe_id = Uuid::new_v4();
    user.favorites_mut().add_recipe(recipe_id).expect("add");

    assert!(user.favorites_mut().remove_recipe(recipe_id));
    assert!(!user.favorites_mut().remove_recipe(recipe_id));
    assert!(user.favorites.is_empty());
}

#[test]
fn standalone_collection_rejects_duplicates() {
    let mut collection = common::collection(Uuid::new_v4(), false);
    let recipe_id = Uuid::new_v4();

    collection.add_recipe(recipe_id).expect("add");
    assert!(collection.contains(recipe_id));
    assert!(matches!(collection.add_recipe(recipe_id), Err(AppError::Conflict(_))));
}

#[test]
fn embedded_collections_are_found_by_id() {
    let mut user = common::user();
    let weeknight = embedded("Weeknight");
    let id = weeknight.id;
    user.push_collection(weeknight);
    user.push_collection(embedded("Holidays"));

    let recipe_id = Uuid::new_v4();
    user.find_collection_mut(id)
        .expect("collection")
        .add_recipe(recipe_id)
        .expect("add");

    assert_eq!(user.collections[0].recipes, vec![recipe_id]);
    assert!(user.collections[1].recipes.is_empty());
    assert!(matches!(
        user.find_collection_mut(Uuid::new_v4()),
        Err(AppError::NotFound("Collection"))
    ));
}

#[test]
fn removing_a_missing_embedded_collection_is_not_found() {
    let mut user = common::user();
    let kept = embedded("Kept");
    let kept_id = kept.id;
    user.push_collection(kept);

    assert!(matches!(
        user.remove_collection(Uuid::new_v4()),
        Err(AppError::NotFound("Collection"))
    ));
    let removed = user.remove_collection(kept_id).expect("remove");
    assert_eq!(removed.name, "Kept");
    assert!(user.collections.is_empty());
}

#[test]
fn detach_recipe_clears_every_reference() {
    let mut user = common::user();
    let doomed = Uuid::new_v4();
    let other = Uuid::new_v4();

    user.favorites = vec![other, doomed];
    user.created_recipes = vec![doomed];
    let mut group = embedded("Group");
    group.recipes = vec![doomed, other];
    user.push_collection(group);

    assert!(user.detach_recipe(doomed));
    assert_eq!(user.favorites, vec![other]);
    assert!(user.created_recipes.is_empty());
    assert_eq!(user.collections[0].recipes, vec![other]);

    assert!(!user.detach_recipe(doomed));
}

#[test]
fn only_the_owner_passes() {
    let owner = Uuid::new_v4();

    assert!(ensure_owner(Some(owner), owner).is_ok());
    assert!(matches!(ensure_owner(Some(owner), Uuid::new_v4()), Err(AppError::Forbidden)));
    assert!(matches!(ensure_owner(None, owner), Err(AppError::Forbidden)));
}
