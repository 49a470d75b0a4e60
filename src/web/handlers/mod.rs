// src/web/handlers/mod.rs

pub mod auth_handlers;
pub mod cart_handlers;
pub mod order_handlers;
pub mod product_handlers;

use actix_web::http::header;
use actix_web::{web, FromRequest, HttpRequest};
use tracing::warn;

use crate::errors::AppError;
use crate::models::Role;
use crate::state::AppState;

/// Extractor resolving the request's bearer token against the mock user
/// store. Missing or unknown tokens fail extraction with a 401; role
/// checks are left to the handlers (403).
#[derive(Debug)]
pub struct AuthenticatedUser {
  pub username: String,
  pub role: Role,
}

impl AuthenticatedUser {
  pub fn require_admin(&self) -> Result<(), AppError> {
    if self.role == Role::Admin {
      Ok(())
    } else {
      Err(AppError::Forbidden("Administrator role required".to_string()))
    }
  }
}

fn bearer_token(req: &HttpRequest) -> Option<&str> {
  req
    .headers()
    .get(header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .and_then(|v| v.strip_prefix("Bearer "))
}

impl FromRequest for AuthenticatedUser {
  type Error = AppError;
  type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    let resolved = req
      .app_data::<web::Data<AppState>>()
      .and_then(|state| bearer_token(req).and_then(|t| state.mock.identity_for_token(t)));

    match resolved {
      Some((username, role)) => futures_util::future::ready(Ok(AuthenticatedUser { username, role })),
      None => {
        warn!("AuthenticatedUser extractor: missing or invalid bearer token.");
        futures_util::future::ready(Err(AppError::Auth(
          "Missing or invalid bearer token".to_string(),
        )))
      }
    }
  }
}
