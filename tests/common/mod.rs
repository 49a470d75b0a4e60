// tests/common/mod.rs
#![allow(dead_code)] // Allow unused helpers in this common test module

use once_cell::sync::Lazy;
use storefront::models::Product;

static TRACING: Lazy<()> = Lazy::new(|| {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_test_writer()
    .try_init();
});

/// Installs a test tracing subscriber once per test binary.
pub fn setup_tracing() {
  Lazy::force(&TRACING);
}

/// A minimal product for cart tests; price is in cents.
pub fn product(id: u32, name: &str, price_cents: i64) -> Product {
  Product {
    id,
    name: name.to_string(),
    description: format!("{name} description"),
    price_cents,
    image_url: format!("/{}.jpg", name.to_lowercase().replace(' ', "-")),
    category: "Test".to_string(),
    stock_quantity: 100,
  }
}
