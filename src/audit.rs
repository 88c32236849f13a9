use serde_json::Value;
use uuid::Uuid;

use crate::{db::DbPool, error::AppResult};

/// Audited mutations. Each maps to an `action` string and the table it touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    UserRegister,
    UserLogin,
    RecipeCreate,
    RecipeDelete,
    CollectionDelete,
    OrderCreate,
    OrderPaid,
    OrderStatusChange,
    OrderCancel,
    OrderDelete,
}

impl AuditAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UserRegister => "user_register",
            Self::UserLogin => "user_login",
            Self::RecipeCreate => "recipe_create",
            Self::RecipeDelete => "recipe_delete",
            Self::CollectionDelete => "collection_delete",
            Self::OrderCreate => "order_create",
            Self::OrderPaid => "order_paid",
            Self::OrderStatusChange => "order_status",
            Self::OrderCancel => "order_cancel",
            Self::OrderDelete => "order_delete",
        }
    }

    pub fn resource(self) -> &'static str {
        match self {
            Self::UserRegister | Self::UserLogin => "users",
            Self::RecipeCreate | Self::RecipeDelete => "recipes",
            Self::CollectionDelete => "collections",
            Self::OrderCreate
            | Self::OrderPaid
            | Self::OrderStatusChange
            | Self::OrderCancel
            | Self::OrderDelete => "orders",
        }
    }
}

pub async fn log_audit(
    pool: &DbPool,
    user_id: Uuid,
    action: AuditAction,
    metadata: Value,
) -> AppResult<()> {
    sqlx::query(
        r#"
        INSERT INTO audit_logs (id, user_id, action, resource, metadata)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(action.as_str())
    .bind(action.resource())
    .bind(metadata)
    .execute(pool)
    .await?;

    Ok(())
}

/// Writes the audit row after the primary change has committed. A failed
/// write is logged at WARN and never reaches the caller.
pub async fn record(pool: &DbPool, user_id: Uuid, action: AuditAction, metadata: Value) {
    if let Err(err) = log_audit(pool, user_id, action, metadata).await {
        tracing::warn!(error = %err, action = action.as_str(), "audit log failed");
    }
}
