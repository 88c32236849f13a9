use chrono::Utc;
use sea_orm::entity::prelude::*;

use super::json::{IdList, StringList};
use crate::models::Collection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "collections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub user_id: Uuid,
    pub is_public: bool,
    #[sea_orm(column_type = "JsonBinary")]
    pub recipes: IdList,
    pub cover_image: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub tags: StringList,
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

impl From<Model> for Collection {
    fn from(model: Model) -> Self {
        Collection {
            id: model.id,
            name: model.name,
            description: model.description,
            user_id: model.user_id,
            is_public: model.is_public,
            recipes: model.recipes.0,
            cover_image: model.cover_image,
            tags: model.tags.0,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
