// tests/storage_tests.rs
mod common;

use actix_web::http::StatusCode;
use common::*;
use storefront::cart::{store::CART_NAMESPACE, CartStore};
use storefront::config::AppConfig;
use storefront::models::{Role, Session};
use storefront::session::{SessionStore, SESSION_NAMESPACE};
use storefront::storage::SnapshotStore;

fn session(username: &str, role: Role) -> Session {
  Session {
    username: username.to_string(),
    role,
    token: format!("mock-token-{username}-test"),
  }
}

#[test]
fn cart_snapshot_survives_a_store_reload() {
  setup_tracing();
  let dir = tempfile::tempdir().expect("tempdir");
  let storage = SnapshotStore::open(dir.path()).expect("open storage");

  let mut store = CartStore::open(storage.clone()).expect("open cart");
  store.add(product(1, "Laptop", 129_999), 2).expect("add");
  store.add(product(6, "Shirt", 2_999), 1).expect("add");

  let reopened = CartStore::open(storage).expect("reopen cart");
  assert_eq!(reopened.cart().item_count(), 3);
  assert_eq!(reopened.cart().total_price_cents(), 2 * 129_999 + 2_999);
}

#[test]
fn every_mutation_persists_not_just_the_last_one() {
  setup_tracing();
  let dir = tempfile::tempdir().expect("tempdir");
  let storage = SnapshotStore::open(dir.path()).expect("open storage");

  let mut store = CartStore::open(storage.clone()).expect("open cart");
  store.add(product(1, "Laptop", 129_999), 4).expect("add");
  store.set_quantity(1, 2).expect("set quantity");

  // Drop without any explicit flush; the snapshot must already be current.
  drop(store);

  let reopened = CartStore::open(storage).expect("reopen cart");
  assert_eq!(reopened.cart().item_count(), 2);
}

#[test]
fn missing_snapshot_yields_an_empty_cart() {
  setup_tracing();
  let dir = tempfile::tempdir().expect("tempdir");
  let storage = SnapshotStore::open(dir.path()).expect("open storage");

  let store = CartStore::open(storage).expect("open cart");
  assert!(store.cart().is_empty());
}

#[test]
fn corrupt_snapshot_is_an_error_not_an_empty_cart() {
  setup_tracing();
  let dir = tempfile::tempdir().expect("tempdir");
  std::fs::write(dir.path().join(format!("{CART_NAMESPACE}.json")), b"{not json").expect("write");
  let storage = SnapshotStore::open(dir.path()).expect("open storage");

  assert!(CartStore::open(storage).is_err());
}

#[test]
fn cart_and_session_namespaces_are_independent() {
  setup_tracing();
  let dir = tempfile::tempdir().expect("tempdir");
  let storage = SnapshotStore::open(dir.path()).expect("open storage");

  let mut cart = CartStore::open(storage.clone()).expect("open cart");
  cart.add(product(1, "Laptop", 129_999), 1).expect("add");
  let mut sessions = SessionStore::open(storage.clone()).expect("open sessions");
  sessions.set(session("user1", Role::User)).expect("set session");

  // Logging out must not touch the cart snapshot.
  sessions.clear().expect("clear session");
  let cart = CartStore::open(storage.clone()).expect("reopen cart");
  assert_eq!(cart.cart().item_count(), 1);
  assert!(storage.load::<Session>(SESSION_NAMESPACE).expect("load").is_none());
}

#[test]
fn session_survives_a_reload_and_reports_role() {
  setup_tracing();
  let dir = tempfile::tempdir().expect("tempdir");
  let storage = SnapshotStore::open(dir.path()).expect("open storage");

  let mut sessions = SessionStore::open(storage.clone()).expect("open sessions");
  assert!(!sessions.is_authenticated());
  sessions.set(session("admin", Role::Admin)).expect("set session");

  let reopened = SessionStore::open(storage).expect("reopen sessions");
  assert!(reopened.is_authenticated());
  assert!(reopened.is_admin());
  assert_eq!(reopened.current().map(|s| s.username.as_str()), Some("admin"));
}

#[test]
fn client_stores_open_from_the_configured_storage_dir() {
  setup_tracing();
  let dir = tempfile::tempdir().expect("tempdir");
  let config = AppConfig::for_tests(dir.path());

  let mut cart = CartStore::from_config(&config).expect("open cart");
  cart.add(product(1, "Laptop", 129_999), 2).expect("add");
  let mut sessions = SessionStore::from_config(&config).expect("open sessions");
  sessions.set(session("user1", Role::User)).expect("set session");

  // Snapshots land under the directory the config names.
  assert!(dir.path().join(format!("{CART_NAMESPACE}.json")).exists());
  assert!(dir.path().join(format!("{SESSION_NAMESPACE}.json")).exists());

  let cart = CartStore::from_config(&config).expect("reopen cart");
  assert_eq!(cart.cart().item_count(), 2);
  let sessions = SessionStore::from_config(&config).expect("reopen sessions");
  assert!(sessions.is_authenticated());
}

#[test]
fn unauthorized_response_forces_logout() {
  setup_tracing();
  let dir = tempfile::tempdir().expect("tempdir");
  let storage = SnapshotStore::open(dir.path()).expect("open storage");

  let mut sessions = SessionStore::open(storage.clone()).expect("open sessions");
  sessions.set(session("user1", Role::User)).expect("set session");

  // Ordinary statuses leave the session alone.
  sessions.observe_status(StatusCode::OK).expect("observe");
  sessions.observe_status(StatusCode::FORBIDDEN).expect("observe");
  assert!(sessions.is_authenticated());

  // A 401 from any endpoint clears it, durably.
  sessions.observe_status(StatusCode::UNAUTHORIZED).expect("observe");
  assert!(!sessions.is_authenticated());
  let reopened = SessionStore::open(storage).expect("reopen sessions");
  assert!(!reopened.is_authenticated());
}
