// src/web/handlers/cart_handlers.rs

//! Server-side cart endpoints.
//!
//! The authoritative cart lives client-side (`cart::CartStore`); these
//! responses are advisory echoes kept only so the HTTP surface matches the
//! real API.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::cart::CartItem;
use crate::errors::AppError;
use crate::mock::CART_DELAY_MS;
use crate::state::AppState;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CartEnvelope {
  id: u32,
  items: Vec<CartItem>,
  total_price_cents: i64,
}

impl CartEnvelope {
  fn empty() -> Self {
    Self {
      id: 1,
      items: Vec::new(),
      total_price_cents: 0,
    }
  }

  fn single(item: CartItem) -> Self {
    Self {
      id: 1,
      total_price_cents: item.product.price_cents * i64::from(item.quantity),
      items: vec![item],
    }
  }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CartItemQuery {
  pub product_id: u32,
  pub quantity: u32,
}

#[instrument(name = "handler::get_cart", skip(app_state))]
pub async fn get_cart_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  app_state.simulate_latency(CART_DELAY_MS).await;
  Ok(HttpResponse::Ok().json(CartEnvelope::empty()))
}

#[instrument(name = "handler::cart_add", skip(app_state, query), fields(product_id = %query.product_id))]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  query: web::Query<CartItemQuery>,
) -> Result<HttpResponse, AppError> {
  app_state.simulate_latency(CART_DELAY_MS).await;

  match app_state.mock.product(query.product_id) {
    Some(product) => Ok(HttpResponse::Ok().json(CartEnvelope::single(CartItem {
      product,
      quantity: query.quantity,
    }))),
    None => {
      warn!("Cart add for unknown product {}.", query.product_id);
      Err(AppError::NotFound(format!("Product {} not found", query.product_id)))
    }
  }
}

#[instrument(name = "handler::cart_update", skip(app_state, query), fields(product_id = %query.product_id))]
pub async fn update_cart_handler(
  app_state: web::Data<AppState>,
  query: web::Query<CartItemQuery>,
) -> Result<HttpResponse, AppError> {
  app_state.simulate_latency(CART_DELAY_MS).await;

  let envelope = match app_state.mock.product(query.product_id) {
    Some(product) => CartEnvelope::single(CartItem {
      product,
      quantity: query.quantity,
    }),
    None => CartEnvelope::empty(),
  };
  Ok(HttpResponse::Ok().json(envelope))
}

#[instrument(name = "handler::cart_remove", skip(app_state))]
pub async fn remove_from_cart_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  app_state.simulate_latency(CART_DELAY_MS).await;
  Ok(HttpResponse::Ok().json(CartEnvelope::empty()))
}
