use chrono::Utc;
use sea_orm::entity::prelude::*;

use super::json::OrderItemList;
use crate::models::{Order, OrderStatus, ShippingAddress};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub user_id: Uuid,
    #[sea_orm(column_type = "JsonBinary")]
    pub items: OrderItemList,
    pub total_amount: i64,
    #[sea_orm(column_type = "JsonBinary")]
    pub shipping_address: ShippingAddress,
    pub payment_method: String,
    pub status: OrderStatus,
    pub is_paid: bool,
    pub paid_at: Option<DateTimeWithTimeZone>,
    pub is_delivered: bool,
    pub delivered_at: Option<DateTimeWithTimeZone>,
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

impl From<Model> for Order {
    fn from(model: Model) -> Self {
        Order {
            id: model.id,
            user_id: model.user_id,
            items: model.items.0,
            total_amount: model.total_amount,
            shipping_address: model.shipping_address,
            payment_method: model.payment_method,
            status: model.status,
            is_paid: model.is_paid,
            paid_at: model.paid_at.map(|dt| dt.with_timezone(&Utc)),
            is_delivered: model.is_delivered,
            delivered_at: model.delivered_at.map(|dt| dt.with_timezone(&Utc)),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
