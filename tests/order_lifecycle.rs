mod common;

use chrono::Utc;
use recipe_share_api::{
    error::AppError,
    lifecycle::order_total,
    models::{OrderItem, OrderStatus},
};

use common::order;

#[test]
fn pending_order_can_be_cancelled() {
    let mut pending = order(OrderStatus::Pending);
    pending.cancel(Utc::now()).expect("cancel");
    assert_eq!(pending.status, OrderStatus::Cancelled);
}

#[test]
fn delivered_order_cannot_be_cancelled() {
    let mut delivered = order(OrderStatus::Delivered);
    let err = delivered.cancel(Utc::now()).unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition(_)));
    assert_eq!(delivered.status, OrderStatus::Delivered);
}

#[test]
fn paying_moves_to_processing() {
    let mut pending = order(OrderStatus::Pending);
    let now = Utc::now();

    let previous = pending.mark_paid(now);

    assert_eq!(previous, OrderStatus::Pending);
    assert!(pending.is_paid);
    assert_eq!(pending.paid_at, Some(now));
    assert_eq!(pending.status, OrderStatus::Processing);
}

#[test]
fn paying_a_cancelled_order_reports_the_terminal_status() {
    let mut cancelled = order(OrderStatus::Cancelled);
    let previous = cancelled.mark_paid(Utc::now());
    assert!(previous.is_terminal());
    assert_eq!(cancelled.status, OrderStatus::Processing);
}

#[test]
fn delivery_stamps_the_order() {
    let mut shipped = order(OrderStatus::Shipped);
    let now = Utc::now();

    shipped.update_status(OrderStatus::Delivered, now).expect("deliver");

    assert_eq!(shipped.status, OrderStatus::Delivered);
    assert!(shipped.is_delivered);
    assert_eq!(shipped.delivered_at, Some(now));
}

#[test]
fn terminal_orders_do_not_move() {
    let mut delivered = order(OrderStatus::Delivered);
    let err = delivered
        .update_status(OrderStatus::Processing, Utc::now())
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition(_)));

    let mut cancelled = order(OrderStatus::Cancelled);
    assert!(cancelled.update_status(OrderStatus::Shipped, Utc::now()).is_err());
    assert!(cancelled.update_status(OrderStatus::Cancelled, Utc::now()).is_err());
}

#[test]
fn cancelling_through_status_update_uses_the_cancel_guard() {
    let mut processing = order(OrderStatus::Processing);
    processing
        .update_status(OrderStatus::Cancelled, Utc::now())
        .expect("cancel");
    assert_eq!(processing.status, OrderStatus::Cancelled);
}

#[test]
fn status_strings_parse() {
    assert_eq!("shipped".parse::<OrderStatus>(), Ok(OrderStatus::Shipped));
    assert!("lost".parse::<OrderStatus>().is_err());
    assert_eq!(OrderStatus::Delivered.to_string(), "delivered");
}

#[test]
fn total_is_price_times_quantity() {
    let items = vec![
        OrderItem {
            recipe_id: None,
            name: "Knife".into(),
            quantity: 1,
            price: 4500,
        },
        OrderItem {
            recipe_id: None,
            name: "Spices".into(),
            quantity: 3,
            price: 250,
        },
    ];
    assert_eq!(order_total(&items).unwrap(), 5250);
    assert_eq!(order_total(&[]).unwrap(), 0);
}

#[test]
fn total_overflow_is_rejected() {
    let line_overflow = vec![OrderItem {
        recipe_id: None,
        name: "Truffle".into(),
        quantity: 2,
        price: i64::MAX / 2 + 1,
    }];
    assert!(matches!(
        order_total(&line_overflow),
        Err(AppError::InvalidInput(msg)) if msg == "Order total out of range"
    ));

    let sum_overflow = vec![
        OrderItem {
            recipe_id: None,
            name: "Saffron".into(),
            quantity: 1,
            price: i64::MAX,
        },
        OrderItem {
            recipe_id: None,
            name: "Salt".into(),
            quantity: 1,
            price: 1,
        },
    ];
    assert!(matches!(
        order_total(&sum_overflow),
        Err(AppError::InvalidInput(_))
    ));
}
