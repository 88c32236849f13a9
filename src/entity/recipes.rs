use chrono::Utc;
use sea_orm::entity::prelude::*;

use super::json::{ReviewList, StringList};
use crate::models::{Difficulty, Nutrition, Recipe, Season};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "recipes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub title: String,
    pub chef: String,
    pub user_id: Option<Uuid>,
    pub image: Option<String>,
    pub time: i32,
    pub servings: i32,
    #[sea_orm(column_type = "Double")]
    pub rating: f64,
    #[sea_orm(column_type = "JsonBinary")]
    pub reviews: ReviewList,
    pub reviews_count: i32,
    #[sea_orm(column_type = "JsonBinary")]
    pub ingredients: StringList,
    #[sea_orm(column_type = "JsonBinary")]
    pub instructions: StringList,
    #[sea_orm(column_type = "JsonBinary")]
    pub nutrition: Nutrition,
    #[sea_orm(column_type = "JsonBinary")]
    pub tags: StringList,
    pub season: Season,
    #[sea_orm(column_type = "JsonBinary")]
    pub mood: StringList,
    pub difficulty: Difficulty,
    pub cuisine: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Recipe {
    fn from(model: Model) -> Self {
        Recipe {
            id: model.id,
            title: model.title,
            chef: model.chef,
            user_id: model.user_id,
            image: model.image,
            time: model.time,
            servings: model.servings,
            rating: model.rating,
            reviews: model.reviews.0,
            reviews_count: model.reviews_count,
            ingredients: model.ingredients.0,
            instructions: model.instructions.0,
            nutrition: model.nutrition,
            tags: model.tags.0,
            season: model.season,
            mood: model.mood.0,
            difficulty: model.difficulty,
            cuisine: model.cuisine,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
