use chrono::Utc;
use sea_orm::entity::prelude::*;

use crate::models::{Notification, NotificationKind};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    /// The user receiving the notification
    pub recipient_id: Uuid,
    /// The user who triggered it, absent for system events
    pub sender_id: Option<Uuid>,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub recipe_id: Option<Uuid>,
    pub order_id: Option<Uuid>,
    pub read: bool,
    pub action: String,
    pub comment: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::RecipientId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    Recipient,
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Notification {
    fn from(model: Model) -> Self {
        Notification {
            id: model.id,
            recipient_id: model.recipient_id,
            sender_id: model.sender_id,
            kind: model.kind,
            title: model.title,
            message: model.message,
            recipe_id: model.recipe_id,
            order_id: model.order_id,
            read: model.read,
            action: model.action,
            comment: model.comment,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
