// src/cart/store.rs

use crate::cart::Cart;
use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::Product;
use crate::storage::SnapshotStore;
use tracing::{debug, instrument};

/// Namespace of the cart snapshot inside the local storage directory.
pub const CART_NAMESPACE: &str = "cart-storage";

/// A `Cart` bound to durable local storage. Every mutation replaces the
/// persisted snapshot in full (last write wins, no cross-device merging).
#[derive(Debug)]
pub struct CartStore {
  cart: Cart,
  storage: SnapshotStore,
}

impl CartStore {
  /// Opens the store, restoring the previously persisted cart if one
  /// exists in this storage directory.
  #[instrument(name = "cart_store::open", skip(storage))]
  pub fn open(storage: SnapshotStore) -> Result<Self> {
    let cart = storage.load::<Cart>(CART_NAMESPACE)?.unwrap_or_default();
    debug!(lines = cart.items().len(), "Cart restored from local storage.");
    Ok(Self { cart, storage })
  }

  /// Opens the store over the configured local storage directory.
  pub fn from_config(config: &AppConfig) -> Result<Self> {
    Self::open(SnapshotStore::open(&config.storage_dir)?)
  }

  pub fn cart(&self) -> &Cart {
    &self.cart
  }

  pub fn add(&mut self, product: Product, quantity: u32) -> Result<()> {
    self.cart.add(product, quantity);
    self.persist()
  }

  pub fn remove(&mut self, product_id: u32) -> Result<()> {
    self.cart.remove(product_id);
    self.persist()
  }

  pub fn set_quantity(&mut self, product_id: u32, quantity: i64) -> Result<()> {
    self.cart.set_quantity(product_id, quantity);
    self.persist()
  }

  /// Empties the cart; invoked by the checkout flow after the order is
  /// accepted.
  pub fn clear(&mut self) -> Result<()> {
    self.cart.clear();
    self.persist()
  }

  fn persist(&self) -> Result<()> {
    self.storage.save(CART_NAMESPACE, &self.cart)
  }
}
