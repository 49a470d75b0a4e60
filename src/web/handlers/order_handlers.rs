// src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::mock::{CHECKOUT_DELAY_MS, ORDER_LIST_DELAY_MS, ORDER_READ_DELAY_MS};
use crate::models::{CheckoutItem, OrderStatus};
use crate::state::AppState;
use crate::web::handlers::AuthenticatedUser;

// --- Request DTOs ---

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequestPayload {
  pub shipping_address: String,
  /// The client submits its cart lines; the backend re-prices them from
  /// the catalog rather than trusting client-side totals.
  #[serde(default)]
  pub items: Vec<CheckoutItem>,
}

#[derive(Deserialize, Debug)]
pub struct UpdateOrderStatusPayload {
  pub status: OrderStatus,
}

// --- Handler Implementations ---

#[instrument(name = "handler::list_orders", skip(app_state, auth_user), fields(username = %auth_user.username))]
pub async fn list_orders_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  app_state.simulate_latency(ORDER_LIST_DELAY_MS).await;

  let orders = app_state.mock.orders_for(&auth_user.username, auth_user.role);
  Ok(HttpResponse::Ok().json(orders))
}

#[instrument(
  name = "handler::get_order",
  skip(app_state, auth_user, path),
  fields(username = %auth_user.username, order_id = %path.as_ref())
)]
pub async fn get_order_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
  path: web::Path<u32>,
) -> Result<HttpResponse, AppError> {
  app_state.simulate_latency(ORDER_READ_DELAY_MS).await;

  let order = app_state
    .mock
    .order_for(path.into_inner(), &auth_user.username, auth_user.role)?;
  Ok(HttpResponse::Ok().json(order))
}

#[instrument(
  name = "handler::checkout",
  skip(app_state, auth_user, req_payload),
  fields(username = %auth_user.username, lines = req_payload.items.len())
)]
pub async fn checkout_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
  req_payload: web::Json<CheckoutRequestPayload>,
) -> Result<HttpResponse, AppError> {
  app_state.simulate_latency(CHECKOUT_DELAY_MS).await;

  let payload = req_payload.into_inner();
  let order = app_state
    .mock
    .checkout(&auth_user.username, payload.shipping_address, &payload.items)?;
  info!(order_id = order.id, "Checkout completed.");
  Ok(HttpResponse::Created().json(order))
}

#[instrument(
  name = "handler::update_order_status",
  skip(app_state, auth_user, path, req_payload),
  fields(username = %auth_user.username, order_id = %path.as_ref())
)]
pub async fn update_order_status_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
  path: web::Path<u32>,
  req_payload: web::Json<UpdateOrderStatusPayload>,
) -> Result<HttpResponse, AppError> {
  app_state.simulate_latency(ORDER_READ_DELAY_MS).await;
  auth_user.require_admin()?;

  let order = app_state.mock.set_order_status(path.into_inner(), req_payload.status)?;
  Ok(HttpResponse::Ok().json(order))
}
