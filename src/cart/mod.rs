// src/cart/mod.rs

//! The client-local cart model.
//!
//! `Cart` is plain data plus pure derivation functions; it never touches
//! storage or the network. `CartStore` wraps a `Cart` together with the
//! local snapshot boundary so that every mutation is durably persisted.

pub mod store;

pub use store::CartStore;

use crate::models::Product;
use serde::{Deserialize, Serialize};

/// One line of the cart: a product snapshot and a requested quantity.
/// Identity is the product id, so a cart never holds two lines for the
/// same product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
  pub product: Product,
  pub quantity: u32,
}

/// An ordered collection of cart lines, scoped to one browsing session.
///
/// Invariants: product ids are unique across lines and every quantity is
/// at least 1 (a mutation driving a quantity to 0 removes the line).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
  items: Vec<CartItem>,
}

impl Cart {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn items(&self) -> &[CartItem] {
    &self.items
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Adds `quantity` of `product`. An existing line for the same product
  /// absorbs the quantity; otherwise a new line is appended, preserving
  /// insertion order. Adding zero is a no-op.
  pub fn add(&mut self, product: Product, quantity: u32) {
    if quantity == 0 {
      return;
    }
    if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
      item.quantity += quantity;
    } else {
      self.items.push(CartItem { product, quantity });
    }
  }

  /// Removes the line for `product_id`; no-op when absent.
  pub fn remove(&mut self, product_id: u32) {
    self.items.retain(|i| i.product.id != product_id);
  }

  /// Overwrites the quantity of an existing line. Any quantity at or
  /// below zero removes the line. Never creates a line for an unknown
  /// product id.
  pub fn set_quantity(&mut self, product_id: u32, quantity: i64) {
    let quantity = match u32::try_from(quantity) {
      Ok(q) if q > 0 => q,
      _ => {
        self.remove(product_id);
        return;
      }
    };
    if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
      item.quantity = quantity;
    }
  }

  pub fn clear(&mut self) {
    self.items.clear();
  }

  /// Total number of units across all lines.
  pub fn item_count(&self) -> u32 {
    self.items.iter().map(|i| i.quantity).sum()
  }

  /// Sum of unit price times quantity over all lines, in cents.
  pub fn total_price_cents(&self) -> i64 {
    self
      .items
      .iter()
      .map(|i| i.product.price_cents * i64::from(i.quantity))
      .sum()
  }
}
