use chrono::Utc;
use sea_orm::entity::prelude::*;

use super::json::{EmbeddedCollectionList, IdList, MealPlanList};
use crate::models::User;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub favorites: IdList,
    #[sea_orm(column_type = "JsonBinary")]
    pub collections: EmbeddedCollectionList,
    #[sea_orm(column_type = "JsonBinary")]
    pub meal_plans: MealPlanList,
    #[sea_orm(column_type = "JsonBinary")]
    pub created_recipes: IdList,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::recipes::Entity")]
    Recipes,
    #[sea_orm(has_many = "super::collections::Entity")]
    Collections,
    #[sea_orm(has_many = "super::orders::Entity")]
    Orders,
}

impl Related<super::recipes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recipes.def()
    }
}

impl Related<super::collections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Collections.def()
    }
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            name: model.name,
            email: model.email,
            avatar: model.avatar,
            bio: model.bio,
            favorites: model.favorites.0,
            collections: model.collections.0,
            meal_plans: model.meal_plans.0,
            created_recipes: model.created_recipes.0,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
