mod common;

use recipe_share_api::{
    dto::collections::UpdateCollectionRequest,
    error::AppError,
    services::collection_service::{apply_update, ensure_visible},
};
use uuid::Uuid;

#[test]
fn private_collection_is_hidden_from_others() {
    let owner = Uuid::new_v4();
    let private = common::collection(owner, false);

    assert!(matches!(
        ensure_visible(&private, Uuid::new_v4()),
        Err(AppError::Forbidden)
    ));
    assert!(ensure_visible(&private, owner).is_ok());
}

#[test]
fn public_collection_is_visible_to_anyone() {
    let public = common::collection(Uuid::new_v4(), true);
    assert!(ensure_visible(&public, Uuid::new_v4()).is_ok());
}

#[test]
fn update_keeps_fields_that_are_absent_or_empty() {
    let mut collection = common::collection(Uuid::new_v4(), false);
    collection.description = "Quick dinners".into();

    apply_update(
        &mut collection,
        UpdateCollectionRequest {
            name: Some("  ".into()),
            description: Some(String::new()),
            is_public: Some(true),
            cover_image: None,
            tags: None,
        },
    );

    assert_eq!(collection.name, "Weeknights");
    assert_eq!(collection.description, "Quick dinners");
    assert!(collection.is_public);
    assert!(collection.cover_image.is_none());
}

#[test]
fn update_replaces_provided_fields() {
    let mut collection = common::collection(Uuid::new_v4(), true);

    apply_update(
        &mut collection,
        UpdateCollectionRequest {
            name: Some(" Brunch ".into()),
            description: Some("Lazy Sundays".into()),
            is_public: Some(false),
            cover_image: Some("https://cdn.example.com/brunch.jpg".into()),
            tags: Some(vec!["weekend".into()]),
        },
    );

    assert_eq!(collection.name, "Brunch");
    assert_eq!(collection.description, "Lazy Sundays");
    assert!(!collection.is_public);
    assert_eq!(
        collection.cover_image.as_deref(),
        Some("https://cdn.example.com/brunch.jpg")
    );
    assert_eq!(collection.tags, vec!["weekend".to_string()]);
}
