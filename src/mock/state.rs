// src/mock/state.rs

use crate::errors::{AppError, Result};
use crate::mock::seed;
use crate::models::{AuthResponse, CheckoutItem, Order, OrderLine, OrderStatus, Product, ProductForm, Role};
use crate::services::auth_service;
use chrono::Utc;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::{info, instrument, warn};

/// A backend-side user record. The password hash and token never leave
/// this module except through `AuthResponse`.
#[derive(Debug, Clone)]
pub struct MockUser {
  pub username: String,
  pub password_hash: String,
  pub role: Role,
  pub token: String,
}

/// The whole simulated server: every collection the real backend would
/// keep in its database, held in memory behind per-collection locks.
/// Seeded once per process; mutated in place; gone on restart.
pub struct MockState {
  users: RwLock<Vec<MockUser>>,
  products: RwLock<Vec<Product>>,
  orders: RwLock<Vec<Order>>,
  next_product_id: AtomicU32,
  next_order_id: AtomicU32,
}

impl MockState {
  pub fn seeded() -> Result<Self> {
    Ok(Self {
      users: RwLock::new(seed::users()?),
      products: RwLock::new(seed::products()),
      orders: RwLock::new(seed::orders()?),
      next_product_id: AtomicU32::new(seed::FIRST_FREE_PRODUCT_ID),
      next_order_id: AtomicU32::new(seed::FIRST_FREE_ORDER_ID),
    })
  }

  // --- Auth ---

  /// Resolves a bearer token to the user it was issued to.
  pub fn identity_for_token(&self, token: &str) -> Option<(String, Role)> {
    self
      .users
      .read()
      .iter()
      .find(|u| u.token == token)
      .map(|u| (u.username.clone(), u.role))
  }

  #[instrument(name = "mock::login", skip(self, password))]
  pub fn login(&self, username: &str, password: &str) -> Result<AuthResponse> {
    let users = self.users.read();
    // Unknown user and bad password answer identically, and the unknown
    // path pays the same hashing cost, so neither the message nor the
    // response time confirms a username.
    let user = match users.iter().find(|u| u.username == username) {
      Some(user) => user,
      None => {
        auth_service::equalize_verification_cost(password);
        return Err(AppError::Auth("Invalid credentials".to_string()));
      }
    };
    if !auth_service::verify_password(&user.password_hash, password)? {
      warn!("Login failed: password mismatch.");
      return Err(AppError::Auth("Invalid credentials".to_string()));
    }
    Ok(AuthResponse {
      token: user.token.clone(),
      username: user.username.clone(),
      role: user.role,
    })
  }

  #[instrument(name = "mock::register", skip(self, password))]
  pub fn register(&self, username: &str, password: &str) -> Result<AuthResponse> {
    let mut users = self.users.write();
    if users.iter().any(|u| u.username == username) {
      return Err(AppError::Validation("Username already exists".to_string()));
    }
    let user = MockUser {
      username: username.to_string(),
      password_hash: auth_service::hash_password(password)?,
      role: Role::User,
      token: auth_service::issue_token(username),
    };
    let response = AuthResponse {
      token: user.token.clone(),
      username: user.username.clone(),
      role: user.role,
    };
    users.push(user);
    info!("Registered new user.");
    Ok(response)
  }

  // --- Catalog ---

  /// Lists products, optionally filtered by a case-insensitive substring
  /// matched against name, description, or category.
  pub fn search_products(&self, search: Option<&str>) -> Vec<Product> {
    let products = self.products.read();
    match search {
      Some(term) if !term.is_empty() => {
        let term = term.to_lowercase();
        products
          .iter()
          .filter(|p| {
            p.name.to_lowercase().contains(&term)
              || p.description.to_lowercase().contains(&term)
              || p.category.to_lowercase().contains(&term)
          })
          .cloned()
          .collect()
      }
      _ => products.clone(),
    }
  }

  pub fn product(&self, id: u32) -> Option<Product> {
    self.products.read().iter().find(|p| p.id == id).cloned()
  }

  #[instrument(name = "mock::create_product", skip(self, form), fields(name = %form.name))]
  pub fn create_product(&self, form: ProductForm) -> Product {
    let id = self.next_product_id.fetch_add(1, Ordering::Relaxed);
    let product = form.into_product(id);
    self.products.write().push(product.clone());
    info!(product_id = id, "Product created.");
    product
  }

  #[instrument(name = "mock::update_product", skip(self, form))]
  pub fn update_product(&self, id: u32, form: ProductForm) -> Result<Product> {
    let mut products = self.products.write();
    let slot = products
      .iter_mut()
      .find(|p| p.id == id)
      .ok_or_else(|| AppError::NotFound(format!("Product {id} not found")))?;
    *slot = form.into_product(id);
    Ok(slot.clone())
  }

  /// Idempotent: deleting an unknown id is not an error.
  #[instrument(name = "mock::delete_product", skip(self))]
  pub fn delete_product(&self, id: u32) {
    self.products.write().retain(|p| p.id != id);
  }

  // --- Orders ---

  /// Admins see every order; regular users only their own.
  pub fn orders_for(&self, username: &str, role: Role) -> Vec<Order> {
    let orders = self.orders.read();
    match role {
      Role::Admin => orders.clone(),
      Role::User => orders.iter().filter(|o| o.username == username).cloned().collect(),
    }
  }

  /// Not-found covers both unknown ids and another user's order, so ids
  /// are not probeable.
  pub fn order_for(&self, id: u32, username: &str, role: Role) -> Result<Order> {
    self
      .orders
      .read()
      .iter()
      .find(|o| o.id == id && (role == Role::Admin || o.username == username))
      .cloned()
      .ok_or_else(|| AppError::NotFound(format!("Order {id} not found")))
  }

  /// Converts the submitted line items into a finalized order: validates
  /// every line against the catalog, checks and decrements stock, snapshots
  /// names and prices, and appends the order.
  #[instrument(name = "mock::checkout", skip(self, items, shipping_address), fields(lines = items.len()))]
  pub fn checkout(&self, username: &str, shipping_address: String, items: &[CheckoutItem]) -> Result<Order> {
    if items.is_empty() {
      return Err(AppError::Validation("Cannot place an order with an empty cart".to_string()));
    }

    // Duplicate lines for one product merge first, mirroring the cart's
    // one-line-per-product invariant, so stock is validated against the
    // combined quantity. A saturated sum always exceeds real stock.
    let mut merged: Vec<CheckoutItem> = Vec::with_capacity(items.len());
    for item in items {
      if item.quantity == 0 {
        return Err(AppError::Validation("Line quantity must be at least 1".to_string()));
      }
      match merged.iter_mut().find(|m| m.product_id == item.product_id) {
        Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
        None => merged.push(item.clone()),
      }
    }

    // One write lock across validation and decrement keeps the stock
    // adjustment atomic with respect to concurrent checkouts.
    let mut products = self.products.write();
    let mut lines = Vec::with_capacity(merged.len());
    for item in &merged {
      let product = products
        .iter()
        .find(|p| p.id == item.product_id)
        .ok_or_else(|| AppError::NotFound(format!("Product {} not found", item.product_id)))?;
      if product.stock_quantity < item.quantity {
        return Err(AppError::Validation(format!(
          "Insufficient stock for product: {}",
          product.name
        )));
      }
      lines.push(OrderLine {
        product_id: product.id,
        product_name: product.name.clone(),
        unit_price_cents: product.price_cents,
        quantity: item.quantity,
      });
    }
    for item in &merged {
      if let Some(product) = products.iter_mut().find(|p| p.id == item.product_id) {
        product.stock_quantity -= item.quantity;
      }
    }
    drop(products);

    let order = Order {
      id: self.next_order_id.fetch_add(1, Ordering::Relaxed),
      username: username.to_string(),
      total_cents: lines.iter().map(OrderLine::line_total_cents).sum(),
      items: lines,
      status: OrderStatus::Pending,
      shipping_address,
      created_at: Utc::now(),
    };
    self.orders.write().push(order.clone());
    info!(order_id = order.id, total_cents = order.total_cents, "Order placed.");
    Ok(order)
  }

  #[instrument(name = "mock::set_order_status", skip(self))]
  pub fn set_order_status(&self, id: u32, status: OrderStatus) -> Result<Order> {
    let mut orders = self.orders.write();
    let order = orders
      .iter_mut()
      .find(|o| o.id == id)
      .ok_or_else(|| AppError::NotFound(format!("Order {id} not found")))?;
    order.status = status;
    Ok(order.clone())
  }
}
