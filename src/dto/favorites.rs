use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Recipe;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    pub recipe_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct FavoriteRecipeList {
    #[schema(value_type = Vec<Recipe>)]
    pub items: Vec<Recipe>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FavoriteIds {
    pub favorites: Vec<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEmbeddedCollectionRequest {
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRecipeRequest {
    pub recipe_id: Uuid,
}

/// Embedded collection with its recipe references resolved.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedCollectionView {
    pub id: Uuid,
    pub name: String,
    pub recipes: Vec<Recipe>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct EmbeddedCollectionList {
    #[schema(value_type = Vec<EmbeddedCollectionView>)]
    pub items: Vec<EmbeddedCollectionView>,
}
