// src/web/handlers/auth_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::mock::AUTH_DELAY_MS;
use crate::state::AppState;

// --- Request DTOs ---

#[derive(Deserialize, Debug)]
pub struct LoginRequestPayload {
  pub username: String,
  pub password: String,
}

#[derive(Deserialize, Debug)]
pub struct RegisterRequestPayload {
  pub username: String,
  pub password: String,
  // Collected by the form but not used by the mock user store.
  pub email: Option<String>,
}

// --- Handler Implementations ---

#[instrument(
  name = "handler::login",
  skip(app_state, req_payload),
  fields(req_username = %req_payload.username)
)]
pub async fn login_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<LoginRequestPayload>,
) -> Result<HttpResponse, AppError> {
  app_state.simulate_latency(AUTH_DELAY_MS).await;

  let response = app_state.mock.login(&req_payload.username, &req_payload.password)?;
  info!("Login successful.");
  Ok(HttpResponse::Ok().json(response))
}

#[instrument(
  name = "handler::register",
  skip(app_state, req_payload),
  fields(req_username = %req_payload.username)
)]
pub async fn register_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<RegisterRequestPayload>,
) -> Result<HttpResponse, AppError> {
  app_state.simulate_latency(AUTH_DELAY_MS).await;

  let response = app_state.mock.register(&req_payload.username, &req_payload.password)?;
  info!("Registration successful.");
  Ok(HttpResponse::Ok().json(response))
}
