// src/models/product.rs

use serde::{Deserialize, Serialize};

/// A catalog product. Immutable from the cart's point of view; only the
/// admin endpoints of the mock backend ever change one.
///
/// Prices are integer cents so that cart totals stay exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: u32,
  pub name: String,
  pub description: String,
  pub price_cents: i64,
  pub image_url: String,
  pub category: String,
  pub stock_quantity: u32,
}

/// Payload for creating or replacing a product; the backend assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
  pub name: String,
  pub description: String,
  pub price_cents: i64,
  pub image_url: String,
  pub category: String,
  pub stock_quantity: u32,
}

impl ProductForm {
  pub fn into_product(self, id: u32) -> Product {
    Product {
      id,
      name: self.name,
      description: self.description,
      price_cents: self.price_cents,
      image_url: self.image_url,
      category: self.category,
      stock_quantity: self.stock_quantity,
    }
  }
}
