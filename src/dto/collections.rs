use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Collection, Recipe};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCollectionRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub is_public: Option<bool>,
    pub cover_image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Absent fields keep their stored value; empty strings are ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCollectionRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_public: Option<bool>,
    pub cover_image: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CollectionDetail {
    #[serde(flatten)]
    pub collection: Collection,
    #[serde(rename = "recipeDetails")]
    pub recipe_details: Vec<Recipe>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct CollectionList {
    #[schema(value_type = Vec<Collection>)]
    pub items: Vec<Collection>,
}
