// src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::mock::{CATALOG_READ_DELAY_MS, CATALOG_WRITE_DELAY_MS};
use crate::models::ProductForm;
use crate::state::AppState;
use crate::web::handlers::AuthenticatedUser;

#[derive(Deserialize, Debug)]
pub struct ListProductsQuery {
  pub search: Option<String>,
}

#[instrument(name = "handler::list_products", skip(app_state, query_params))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ListProductsQuery>,
) -> Result<HttpResponse, AppError> {
  app_state.simulate_latency(CATALOG_READ_DELAY_MS).await;

  let products = app_state.mock.search_products(query_params.search.as_deref());
  info!("Returning {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<u32>,
) -> Result<HttpResponse, AppError> {
  app_state.simulate_latency(CATALOG_READ_DELAY_MS).await;

  let product_id = path.into_inner();
  match app_state.mock.product(product_id) {
    Some(product) => Ok(HttpResponse::Ok().json(product)),
    None => {
      warn!("Product {} not found.", product_id);
      Err(AppError::NotFound(format!("Product {product_id} not found")))
    }
  }
}

#[instrument(
  name = "handler::create_product",
  skip(app_state, auth_user, req_payload),
  fields(username = %auth_user.username)
)]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
  req_payload: web::Json<ProductForm>,
) -> Result<HttpResponse, AppError> {
  app_state.simulate_latency(CATALOG_WRITE_DELAY_MS).await;
  auth_user.require_admin()?;

  let product = app_state.mock.create_product(req_payload.into_inner());
  Ok(HttpResponse::Created().json(product))
}

#[instrument(
  name = "handler::update_product",
  skip(app_state, auth_user, path, req_payload),
  fields(username = %auth_user.username, product_id = %path.as_ref())
)]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
  path: web::Path<u32>,
  req_payload: web::Json<ProductForm>,
) -> Result<HttpResponse, AppError> {
  app_state.simulate_latency(CATALOG_WRITE_DELAY_MS).await;
  auth_user.require_admin()?;

  let product = app_state.mock.update_product(path.into_inner(), req_payload.into_inner())?;
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(
  name = "handler::delete_product",
  skip(app_state, auth_user, path),
  fields(username = %auth_user.username, product_id = %path.as_ref())
)]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
  path: web::Path<u32>,
) -> Result<HttpResponse, AppError> {
  app_state.simulate_latency(CATALOG_WRITE_DELAY_MS).await;
  auth_user.require_admin()?;

  app_state.mock.delete_product(path.into_inner());
  Ok(HttpResponse::NoContent().finish())
}
