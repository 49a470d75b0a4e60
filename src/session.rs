// src/session.rs

//! The client-side authenticated-session store.
//!
//! Holds at most one `Session` (username, role, bearer token), persisted
//! under its own namespace so a reload keeps the user signed in. The
//! response-handling layer feeds every HTTP status through
//! [`SessionStore::observe_status`]; a 401 force-clears the session.

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::Session;
use crate::storage::SnapshotStore;
use actix_web::http::StatusCode;
use tracing::{info, instrument};

/// Namespace of the session snapshot inside the local storage directory.
pub const SESSION_NAMESPACE: &str = "auth-storage";

#[derive(Debug)]
pub struct SessionStore {
  session: Option<Session>,
  storage: SnapshotStore,
}

impl SessionStore {
  /// Opens the store, restoring a previously persisted session if any.
  #[instrument(name = "session_store::open", skip(storage))]
  pub fn open(storage: SnapshotStore) -> Result<Self> {
    let session = storage.load::<Session>(SESSION_NAMESPACE)?;
    Ok(Self { session, storage })
  }

  /// Opens the store over the configured local storage directory.
  pub fn from_config(config: &AppConfig) -> Result<Self> {
    Self::open(SnapshotStore::open(&config.storage_dir)?)
  }

  pub fn current(&self) -> Option<&Session> {
    self.session.as_ref()
  }

  pub fn is_authenticated(&self) -> bool {
    self.session.is_some()
  }

  pub fn is_admin(&self) -> bool {
    self.session.as_ref().map(Session::is_admin).unwrap_or(false)
  }

  /// Records a fresh login and persists it.
  pub fn set(&mut self, session: Session) -> Result<()> {
    self.storage.save(SESSION_NAMESPACE, &session)?;
    self.session = Some(session);
    Ok(())
  }

  /// Logs out: drops the in-memory session and its snapshot.
  pub fn clear(&mut self) -> Result<()> {
    self.session = None;
    self.storage.delete(SESSION_NAMESPACE)
  }

  /// Side-channel hook for the response-handling layer: an unauthorized
  /// response from any endpoint invalidates the stored credential.
  pub fn observe_status(&mut self, status: StatusCode) -> Result<()> {
    if status == StatusCode::UNAUTHORIZED && self.session.is_some() {
      info!("Received 401; clearing local session (forced logout).");
      self.clear()?;
    }
    Ok(())
  }
}
