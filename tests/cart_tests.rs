// tests/cart_tests.rs
mod common;

use common::*;
use storefront::cart::Cart;

#[test]
fn adding_same_product_twice_merges_into_one_line() {
  setup_tracing();
  let mut cart = Cart::new();
  let laptop = product(1, "Laptop", 129_999);

  cart.add(laptop.clone(), 2);
  cart.add(laptop, 3);

  assert_eq!(cart.items().len(), 1);
  assert_eq!(cart.items()[0].quantity, 5);
  assert_eq!(cart.item_count(), 5);
}

#[test]
fn distinct_products_keep_insertion_order() {
  setup_tracing();
  let mut cart = Cart::new();
  cart.add(product(3, "Headphones", 34_999), 1);
  cart.add(product(1, "Laptop", 129_999), 1);
  cart.add(product(2, "Phone", 89_999), 1);

  let ids: Vec<u32> = cart.items().iter().map(|i| i.product.id).collect();
  assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn set_quantity_zero_removes_the_line() {
  setup_tracing();
  let mut cart = Cart::new();
  cart.add(product(1, "Laptop", 129_999), 2);

  cart.set_quantity(1, 0);

  assert!(cart.is_empty());
  assert_eq!(cart.item_count(), 0);
}

#[test]
fn set_quantity_negative_removes_the_line() {
  setup_tracing();
  let mut cart = Cart::new();
  cart.add(product(1, "Laptop", 129_999), 2);

  cart.set_quantity(1, -1);

  assert!(cart.is_empty());
}

#[test]
fn set_quantity_overwrites_instead_of_accumulating() {
  setup_tracing();
  let mut cart = Cart::new();
  cart.add(product(1, "Laptop", 129_999), 2);

  cart.set_quantity(1, 7);

  assert_eq!(cart.items()[0].quantity, 7);
  assert_eq!(cart.item_count(), 7);
}

#[test]
fn set_quantity_never_creates_a_line_for_unknown_product() {
  setup_tracing();
  let mut cart = Cart::new();

  cart.set_quantity(42, 3);

  assert!(cart.is_empty());
}

#[test]
fn remove_is_a_no_op_for_unknown_product() {
  setup_tracing();
  let mut cart = Cart::new();
  cart.add(product(1, "Laptop", 129_999), 1);

  cart.remove(42);

  assert_eq!(cart.items().len(), 1);
}

#[test]
fn totals_track_a_mixed_sequence_of_mutations() {
  setup_tracing();
  let mut cart = Cart::new();
  let laptop = product(1, "Laptop", 129_999);
  let shirt = product(6, "Shirt", 2_999);
  let book = product(11, "Novel", 1_699);

  cart.add(laptop.clone(), 1);
  cart.add(shirt, 3);
  cart.add(book, 2);
  cart.add(laptop, 1); // merges: laptop x2
  cart.set_quantity(6, 1); // shirt 3 -> 1
  cart.remove(11);

  assert_eq!(cart.item_count(), 3);
  assert_eq!(cart.total_price_cents(), 2 * 129_999 + 2_999);
}

#[test]
fn worked_example_two_then_one_then_remove() {
  setup_tracing();
  let mut cart = Cart::new();
  let a = product(1, "Product A", 1_000); // $10

  assert!(cart.is_empty());
  assert_eq!(cart.total_price_cents(), 0);

  cart.add(a.clone(), 2);
  assert_eq!(cart.item_count(), 2);
  assert_eq!(cart.total_price_cents(), 2_000); // $20

  cart.add(a, 1);
  assert_eq!(cart.item_count(), 3);
  assert_eq!(cart.total_price_cents(), 3_000); // $30

  cart.remove(1);
  assert_eq!(cart.item_count(), 0);
  assert_eq!(cart.total_price_cents(), 0);
}

#[test]
fn item_count_is_independent_of_distinct_product_count() {
  setup_tracing();
  let mut one_product = Cart::new();
  one_product.add(product(1, "Laptop", 1), 6);

  let mut three_products = Cart::new();
  three_products.add(product(1, "Laptop", 1), 2);
  three_products.add(product(2, "Phone", 1), 2);
  three_products.add(product(3, "Headphones", 1), 2);

  assert_eq!(one_product.item_count(), 6);
  assert_eq!(three_products.item_count(), 6);
}

#[test]
fn adding_zero_quantity_is_a_no_op() {
  setup_tracing();
  let mut cart = Cart::new();
  cart.add(product(1, "Laptop", 129_999), 0);

  assert!(cart.is_empty());
}

#[test]
fn clear_empties_the_cart() {
  setup_tracing();
  let mut cart = Cart::new();
  cart.add(product(1, "Laptop", 129_999), 2);
  cart.add(product(2, "Phone", 89_999), 1);

  cart.clear();

  assert!(cart.is_empty());
  assert_eq!(cart.total_price_cents(), 0);
}
