use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use sea_orm::sea_query::LockType;
use uuid::Uuid;

use crate::{
    audit::{self, AuditAction},
    dto::orders::{CreateOrderRequest, OrderList, UpdateOrderStatusRequest},
    entity::{
        json::OrderItemList,
        orders::{ActiveModel as OrderActive, Column as OrderCol, Entity as Orders, Model as OrderModel},
    },
    error::{AppError, AppResult},
    lifecycle::order_total,
    membership::ensure_owner,
    middleware::auth::AuthUser,
    models::{NotificationKind, Order, OrderItem, OrderStatus},
    response::{ApiResponse, Meta},
    routes::params::{OrderListQuery, SortOrder},
    services::notification_service::{self, NewNotification},
    state::AppState,
};

fn parse_status(raw: &str) -> AppResult<OrderStatus> {
    raw.trim().parse().map_err(AppError::InvalidInput)
}

fn validate_items(items: &[OrderItem]) -> AppResult<()> {
    if items.is_empty() {
        return Err(AppError::InvalidInput("Order has no items".into()));
    }
    if let Some(item) = items.iter().find(|item| item.quantity <= 0) {
        return Err(AppError::InvalidInput(format!(
            "Invalid quantity for item {}",
            item.name
        )));
    }
    if items.iter().any(|item| item.price < 0) {
        return Err(AppError::InvalidInput("Item price cannot be negative".into()));
    }
    Ok(())
}

/// Loads an order the caller owns. Unknown ids are NotFound, other users'
/// orders Forbidden.
async fn owned_order<C: ConnectionTrait>(
    conn: &C,
    user: &AuthUser,
    id: Uuid,
    lock: bool,
) -> AppResult<OrderModel> {
    let mut finder = Orders::find_by_id(id);
    if lock {
        finder = finder.lock(LockType::Update);
    }
    let order = finder.one(conn).await?.ok_or(AppError::NotFound("Order"))?;
    ensure_owner(Some(order.user_id), user.user_id)?;
    Ok(order)
}

async fn save_transition<C: ConnectionTrait>(
    conn: &C,
    model: OrderModel,
    order: &Order,
) -> AppResult<Order> {
    let mut active: OrderActive = model.into();
    active.status = Set(order.status);
    active.is_paid = Set(order.is_paid);
    active.paid_at = Set(order.paid_at.map(Into::into));
    active.is_delivered = Set(order.is_delivered);
    active.delivered_at = Set(order.delivered_at.map(Into::into));
    active.updated_at = Set(order.updated_at.into());
    let saved = active.update(conn).await?;
    Ok(Order::from(saved))
}

/// System notice to the order owner; orders have no human sender.
async fn notify_owner(state: &AppState, order: &Order, title: &str, message: String) {
    notification_service::dispatch(
        state,
        NewNotification {
            recipient_id: order.user_id,
            sender_id: None,
            kind: NotificationKind::Order,
            title: title.into(),
            message,
            recipe_id: None,
            order_id: Some(order.id),
            action: "View Order".into(),
            comment: None,
        },
    )
    .await;
}

/// Runs one status transition on a locked order row and writes it back.
async fn transition<F>(state: &AppState, user: &AuthUser, id: Uuid, apply: F) -> AppResult<Order>
where
    F: FnOnce(&mut Order) -> AppResult<()>,
{
    let txn = state.orm.begin().await?;
    let model = owned_order(&txn, user, id, true).await?;
    let mut order = Order::from(model.clone());
    apply(&mut order)?;
    let saved = save_transition(&txn, model, &order).await?;
    txn.commit().await?;
    Ok(saved)
}

pub async fn list_orders(
    state: &AppState,
    user: &AuthUser,
    query: OrderListQuery,
) -> AppResult<ApiResponse<OrderList>> {
    let (page, limit, offset) = query.pagination().normalize();
    let mut condition = Condition::all().add(OrderCol::UserId.eq(user.user_id));
    if let Some(status) = query.status.as_deref().filter(|s| !s.is_empty()) {
        condition = condition.add(OrderCol::Status.eq(parse_status(status)?));
    }

    let sort_order = query.sort_order.unwrap_or(SortOrder::Desc);

    let mut finder = Orders::find().filter(condition);
    finder = match sort_order {
        SortOrder::Asc => finder.order_by_asc(OrderCol::CreatedAt),
        SortOrder::Desc => finder.order_by_desc(OrderCol::CreatedAt),
    };

    let total = finder.clone().count(&state.orm).await? as i64;

    let orders = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Order::from)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Ok",
        OrderList { items: orders },
        Some(meta),
    ))
}

pub async fn create_order(
    state: &AppState,
    user: &AuthUser,
    payload: CreateOrderRequest,
) -> AppResult<ApiResponse<Order>> {
    validate_items(&payload.items)?;
    if payload.payment_method.trim().is_empty() {
        return Err(AppError::InvalidInput("Payment method is required".into()));
    }

    let now = Utc::now();
    let total_amount = order_total(&payload.items)?;

    let order = OrderActive {
        id: Set(Uuid::new_v4()),
        user_id: Set(user.user_id),
        items: Set(OrderItemList(payload.items)),
        total_amount: Set(total_amount),
        shipping_address: Set(payload.shipping_address),
        payment_method: Set(payload.payment_method.trim().to_string()),
        status: Set(OrderStatus::Pending),
        is_paid: Set(false),
        paid_at: Set(None),
        is_delivered: Set(false),
        delivered_at: Set(None),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(order_id = %order.id, total_amount, "order created");
    audit::record(
        &state.pool,
        user.user_id,
        AuditAction::OrderCreate,
        serde_json::json!({ "order_id": order.id, "total_amount": total_amount }),
    )
    .await;

    let order = Order::from(order);
    notify_owner(
        state,
        &order,
        "Order placed",
        format!("Your order totalling {total_amount} has been placed"),
    )
    .await;

    Ok(ApiResponse::success(
        "Order created",
        order,
        Some(Meta::empty()),
    ))
}

pub async fn get_order(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<Order>> {
    let order = owned_order(&state.orm, user, id, false).await?;
    Ok(ApiResponse::success("OK", Order::from(order), Some(Meta::empty())))
}

pub async fn pay_order(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<Order>> {
    let order = transition(state, user, id, |order| {
        let previous = order.mark_paid(Utc::now());
        if previous.is_terminal() {
            tracing::warn!(order_id = %order.id, %previous, "payment recorded on a terminal order");
        }
        Ok(())
    })
    .await?;

    audit::record(
        &state.pool,
        user.user_id,
        AuditAction::OrderPaid,
        serde_json::json!({ "order_id": order.id }),
    )
    .await;
    notify_owner(
        state,
        &order,
        "Payment received",
        "Your order has been paid and is being processed".into(),
    )
    .await;

    Ok(ApiResponse::success(
        "Payment recorded",
        order,
        Some(Meta::empty()),
    ))
}

pub async fn update_status(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateOrderStatusRequest,
) -> AppResult<ApiResponse<Order>> {
    let next = parse_status(&payload.status)?;
    let order = transition(state, user, id, |order| order.update_status(next, Utc::now())).await?;

    tracing::info!(order_id = %order.id, status = %order.status, "order status updated");
    audit::record(
        &state.pool,
        user.user_id,
        AuditAction::OrderStatusChange,
        serde_json::json!({ "order_id": order.id, "status": order.status.as_str() }),
    )
    .await;
    notify_owner(
        state,
        &order,
        "Order updated",
        format!("Your order is now {}", order.status),
    )
    .await;

    Ok(ApiResponse::success(
        "Order status updated",
        order,
        Some(Meta::empty()),
    ))
}

pub async fn cancel_order(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<Order>> {
    let order = transition(state, user, id, |order| order.cancel(Utc::now())).await?;

    tracing::info!(order_id = %order.id, "order cancelled");
    audit::record(
        &state.pool,
        user.user_id,
        AuditAction::OrderCancel,
        serde_json::json!({ "order_id": order.id }),
    )
    .await;
    notify_owner(
        state,
        &order,
        "Order cancelled",
        "Your order has been cancelled".into(),
    )
    .await;

    Ok(ApiResponse::success(
        "Order cancelled",
        order,
        Some(Meta::empty()),
    ))
}

pub async fn delete_order(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let order = owned_order(&state.orm, user, id, false).await?;
    Orders::delete_by_id(order.id).exec(&state.orm).await?;

    audit::record(
        &state.pool,
        user.user_id,
        AuditAction::OrderDelete,
        serde_json::json!({ "order_id": order.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Order deleted",
        serde_json::json!({ "id": order.id }),
        Some(Meta::empty()),
    ))
}
