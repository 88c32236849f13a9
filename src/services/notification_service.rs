use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};
use sea_orm::sea_query::Expr;
use uuid::Uuid;

use crate::{
    dto::notifications::NotificationList,
    entity::notifications::{
        ActiveModel as NotificationActive, Column as NotifCol, Entity as Notifications,
    },
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{Notification, NotificationKind},
    response::{ApiResponse, Meta},
    state::AppState,
};

#[derive(Debug, Clone)]
pub struct NewNotification {
    pub recipient_id: Uuid,
    pub sender_id: Option<Uuid>,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub recipe_id: Option<Uuid>,
    pub order_id: Option<Uuid>,
    pub action: String,
    pub comment: Option<String>,
}

/// Nobody is notified about their own actions.
pub fn should_notify(sender_id: Option<Uuid>, recipient_id: Uuid) -> bool {
    sender_id != Some(recipient_id)
}

pub async fn notify(state: &AppState, new: NewNotification) -> AppResult<Option<Notification>> {
    if !should_notify(new.sender_id, new.recipient_id) {
        return Ok(None);
    }

    let created = NotificationActive {
        id: Set(Uuid::new_v4()),
        recipient_id: Set(new.recipient_id),
        sender_id: Set(new.sender_id),
        kind: Set(new.kind),
        title: Set(new.title),
        message: Set(new.message),
        recipe_id: Set(new.recipe_id),
        order_id: Set(new.order_id),
        read: Set(false),
        action: Set(new.action),
        comment: Set(new.comment),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;

    tracing::debug!(
        recipient = %created.recipient_id,
        kind = ?created.kind,
        "notification created"
    );
    Ok(Some(Notification::from(created)))
}

/// Second step after a committed write. The primary change stands even if
/// this fails, so a failure is only logged.
pub async fn dispatch(state: &AppState, new: NewNotification) {
    let recipient = new.recipient_id;
    if let Err(err) = notify(state, new).await {
        tracing::warn!(error = %err, %recipient, "notification delivery failed");
    }
}

pub async fn list_notifications(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<NotificationList>> {
    let items: Vec<Notification> = Notifications::find()
        .filter(NotifCol::RecipientId.eq(user.user_id))
        .order_by_desc(NotifCol::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Notification::from)
        .collect();

    let unread_count = Notifications::find()
        .filter(
            Condition::all()
                .add(NotifCol::RecipientId.eq(user.user_id))
                .add(NotifCol::Read.eq(false)),
        )
        .count(&state.orm)
        .await?;

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Notifications",
        NotificationList {
            items,
            unread_count,
        },
        Some(Meta::new(1, total, total)),
    ))
}

pub async fn mark_read(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<Notification>> {
    let existing = Notifications::find_by_id(id)
        .filter(NotifCol::RecipientId.eq(user.user_id))
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("Notification"))?;

    let mut active: NotificationActive = existing.into();
    active.read = Set(true);
    let updated = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Notification marked as read",
        Notification::from(updated),
        Some(Meta::empty()),
    ))
}

pub async fn mark_all_read(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Notifications::update_many()
        .col_expr(NotifCol::Read, Expr::value(true))
        .filter(
            Condition::all()
                .add(NotifCol::RecipientId.eq(user.user_id))
                .add(NotifCol::Read.eq(false)),
        )
        .exec(&state.orm)
        .await?;

    Ok(ApiResponse::success(
        "All notifications marked as read",
        serde_json::json!({ "updated": result.rows_affected }),
        Some(Meta::empty()),
    ))
}

pub async fn delete_notification(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Notifications::delete_many()
        .filter(
            Condition::all()
                .add(NotifCol::Id.eq(id))
                .add(NotifCol::RecipientId.eq(user.user_id)),
        )
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Notification"));
    }

    Ok(ApiResponse::success(
        "Notification deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
