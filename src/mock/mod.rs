// src/mock/mod.rs

//! The in-memory mock backend.
//!
//! Stands in for a real server during development and demos: collections
//! are seeded once per process from static sample data, mutated in place,
//! and never persisted. Every endpoint sleeps an artificial delay first so
//! the UI exercises its loading states.

pub mod seed;
pub mod state;

pub use state::{MockState, MockUser};

// Per-endpoint artificial latency, roughly matching what a small remote
// API would exhibit.
pub const AUTH_DELAY_MS: u64 = 300;
pub const CATALOG_READ_DELAY_MS: u64 = 200;
pub const CATALOG_WRITE_DELAY_MS: u64 = 300;
pub const CART_DELAY_MS: u64 = 200;
pub const ORDER_LIST_DELAY_MS: u64 = 300;
pub const ORDER_READ_DELAY_MS: u64 = 200;
pub const CHECKOUT_DELAY_MS: u64 = 500;
