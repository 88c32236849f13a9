use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Difficulty, Nutrition, Recipe, Season};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    pub title: String,
    pub chef: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub time: i32,
    pub servings: Option<i32>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub nutrition: Nutrition,
    #[serde(default)]
    pub tags: Vec<String>,
    pub season: Option<Season>,
    #[serde(default)]
    pub mood: Vec<String>,
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub cuisine: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecipeRequest {
    pub title: Option<String>,
    pub chef: Option<String>,
    pub image: Option<String>,
    pub time: Option<i32>,
    pub servings: Option<i32>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
    pub nutrition: Option<Nutrition>,
    pub tags: Option<Vec<String>>,
    pub season: Option<Season>,
    pub mood: Option<Vec<String>>,
    pub difficulty: Option<Difficulty>,
    pub cuisine: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddReviewRequest {
    pub comment: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct RecipeList {
    #[schema(value_type = Vec<Recipe>)]
    pub items: Vec<Recipe>,
}
