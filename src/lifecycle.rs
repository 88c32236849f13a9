//! Order status transitions.
//!
//! ```text
//! pending -> processing -> shipped -> delivered
//!    \___________\____________\_____> cancelled
//! ```
//! `delivered` and `cancelled` are terminal.

use chrono::{DateTime, Utc};

use crate::{
    error::{AppError, AppResult},
    models::{Order, OrderItem, OrderStatus},
};

impl Order {
    pub fn cancel(&mut self, now: DateTime<Utc>) -> AppResult<()> {
        match self.status {
            OrderStatus::Delivered => Err(AppError::InvalidTransition(
                "Cannot cancel a delivered order".into(),
            )),
            OrderStatus::Cancelled => Err(AppError::InvalidTransition(
                "Order is already cancelled".into(),
            )),
            _ => {
                self.status = OrderStatus::Cancelled;
                self.updated_at = now;
                Ok(())
            }
        }
    }

    /// Records payment and moves the order to `processing` whatever its prior
    /// status. Returns the prior status so callers can flag payments recorded
    /// against a terminal order.
    pub fn mark_paid(&mut self, now: DateTime<Utc>) -> OrderStatus {
        let previous = self.status;
        self.is_paid = true;
        self.paid_at = Some(now);
        self.status = OrderStatus::Processing;
        self.updated_at = now;
        previous
    }

    pub fn update_status(&mut self, next: OrderStatus, now: DateTime<Utc>) -> AppResult<()> {
        if next == OrderStatus::Cancelled {
            return self.cancel(now);
        }
        if self.status == next {
            return Ok(());
        }
        if self.status.is_terminal() {
            return Err(AppError::InvalidTransition(format!(
                "Cannot change status of a {} order",
                self.status
            )));
        }

        self.status = next;
        if next == OrderStatus::Delivered {
            self.is_delivered = true;
            self.delivered_at = Some(now);
        }
        self.updated_at = now;
        Ok(())
    }
}

/// Sum of `price * quantity` over the items.
pub fn order_total(items: &[OrderItem]) -> AppResult<i64> {
    items.iter().try_fold(0i64, |total, item| {
        item.price
            .checked_mul(i64::from(item.quantity))
            .and_then(|line| total.checked_add(line))
            .ok_or_else(|| AppError::InvalidInput("Order total out of range".into()))
    })
}
