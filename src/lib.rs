// src/lib.rs

//! Storefront demo stack.
//!
//! Two cooperating pieces:
//!  - Client-side state: a persisted cart ([`cart::CartStore`]) and a
//!    persisted authenticated session ([`session::SessionStore`]), both
//!    plain data with pure derived reads and an explicit JSON snapshot
//!    boundary ([`storage::SnapshotStore`]).
//!  - An in-memory mock backend ([`mock::MockState`]) behind an Actix HTTP
//!    surface, seeded from sample data, with bearer-token authorization
//!    and artificial latency.

pub mod cart;
pub mod config;
pub mod errors;
pub mod mock;
pub mod models;
pub mod services;
pub mod session;
pub mod state;
pub mod storage;
pub mod web;

// --- Re-exports for the Public API ---

pub use crate::cart::{Cart, CartItem, CartStore};
pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::mock::MockState;
pub use crate::session::SessionStore;
pub use crate::state::AppState;
pub use crate::storage::SnapshotStore;
