// src/models/user.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
  User,
  Admin,
}

/// The authenticated-user snapshot a client holds between login and logout.
/// Persisted locally under its own namespace; see `session::SessionStore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
  pub username: String,
  pub role: Role,
  pub token: String,
}

impl Session {
  pub fn is_admin(&self) -> bool {
    self.role == Role::Admin
  }
}

/// Body returned by the login and register endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
  pub token: String,
  pub username: String,
  pub role: Role,
}
