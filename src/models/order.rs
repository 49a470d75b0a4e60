// src/models/order.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a placed order. Linear progression from `Pending` through
/// `Delivered`; `Cancelled` is terminal from any earlier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
  Pending,
  Processing,
  Shipped,
  Delivered,
  Cancelled,
}

/// One purchased line of an order: a snapshot of the product at purchase
/// time, so later catalog edits never rewrite order history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
  pub product_id: u32,
  pub product_name: String,
  pub unit_price_cents: i64,
  pub quantity: u32,
}

impl OrderLine {
  pub fn line_total_cents(&self) -> i64 {
    self.unit_price_cents * i64::from(self.quantity)
  }
}

/// A finalized order. Never mutated by clients after checkout; only the
/// admin status endpoint advances `status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
  pub id: u32,
  pub username: String,
  pub items: Vec<OrderLine>,
  pub total_cents: i64,
  pub status: OrderStatus,
  pub shipping_address: String,
  pub created_at: DateTime<Utc>,
}

/// A requested line item submitted with checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutItem {
  pub product_id: u32,
  pub quantity: u32,
}
