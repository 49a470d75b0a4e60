// src/services/auth_service.rs

//! Password hashing/verification and bearer-token issuance for the mock
//! backend's user store.

use crate::errors::AppError;
use argon2::{
  password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
  Argon2,
};
use tracing::{debug, instrument};
use uuid::Uuid;

/// Hashes a plain-text password using Argon2 with a random salt.
#[instrument(name = "auth_service::hash_password", skip(password), err(Display))]
pub fn hash_password(password: &str) -> Result<String, AppError> {
  if password.is_empty() {
    return Err(AppError::Validation("Password cannot be empty.".to_string()));
  }
  let salt = SaltString::generate(&mut OsRng);
  let hash = Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .map_err(|e| AppError::Internal(format!("Password hashing failed: {e}")))?;
  Ok(hash.to_string())
}

/// Verifies a plain-text password against a stored Argon2 hash. Returns
/// `Ok(false)` for a clean mismatch; only malformed hashes or internal
/// Argon2 failures are errors.
#[instrument(name = "auth_service::verify_password", skip_all, err(Display))]
pub fn verify_password(hashed: &str, provided: &str) -> Result<bool, AppError> {
  let parsed = PasswordHash::new(hashed)
    .map_err(|e| AppError::Internal(format!("Invalid stored password hash format: {e}")))?;
  match Argon2::default().verify_password(provided.as_bytes(), &parsed) {
    Ok(()) => Ok(true),
    Err(argon2::password_hash::Error::Password) => {
      debug!("Password verification failed: passwords do not match.");
      Ok(false)
    }
    Err(e) => Err(AppError::Internal(format!("Password verification failed: {e}"))),
  }
}

/// Burns the cost of a password hash without a stored digest, so a login
/// against an unknown username takes as long as a failed verification.
pub fn equalize_verification_cost(provided: &str) {
  let salt = SaltString::generate(&mut OsRng);
  let _ = Argon2::default().hash_password(provided.as_bytes(), &salt);
}

/// Issues an opaque bearer token for `username`. One token per user; the
/// mock keeps the association for the lifetime of the process.
pub fn issue_token(username: &str) -> String {
  format!("mock-token-{}-{}", username, Uuid::new_v4())
}
