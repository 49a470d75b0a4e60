// src/models/mod.rs

//! Data structures shared between the client-side stores and the mock backend.

pub mod order;
pub mod product;
pub mod user;

pub use order::{CheckoutItem, Order, OrderLine, OrderStatus};
pub use product::{Product, ProductForm};
pub use user::{AuthResponse, Role, Session};
