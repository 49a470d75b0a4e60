// src/mock/seed.rs

//! Static sample data the mock backend starts from.

use crate::errors::{AppError, Result};
use crate::mock::MockUser;
use crate::models::{Order, OrderLine, OrderStatus, Product, Role};
use crate::services::auth_service;
use chrono::{DateTime, Utc};

/// Seeded catalog ids run 1..=12; admin-created products continue here.
pub const FIRST_FREE_PRODUCT_ID: u32 = 13;

/// Seeded order ids run 1001..=1004; checkout continues here.
pub const FIRST_FREE_ORDER_ID: u32 = 1005;

fn product(id: u32, name: &str, description: &str, price_cents: i64, image: &str, category: &str, stock: u32) -> Product {
  Product {
    id,
    name: name.to_string(),
    description: description.to_string(),
    price_cents,
    image_url: image.to_string(),
    category: category.to_string(),
    stock_quantity: stock,
  }
}

pub fn products() -> Vec<Product> {
  vec![
    product(
      1,
      "Pro Laptop 15\"",
      "High-performance laptop with 16GB RAM, 512GB SSD, and a stunning 15.6\" Retina display. Perfect for development and creative work.",
      129_999,
      "/placeholder-laptop.jpg",
      "Electronics",
      25,
    ),
    product(
      2,
      "SmartPhone X12",
      "Latest flagship smartphone with 6.7\" OLED display, triple camera system, and all-day battery life. 5G enabled.",
      89_999,
      "/placeholder-phone.jpg",
      "Electronics",
      50,
    ),
    product(
      3,
      "Wireless Headphones Pro",
      "Premium noise-cancelling wireless headphones with 30-hour battery life, spatial audio, and ultra-comfortable design.",
      34_999,
      "/placeholder-headphones.jpg",
      "Electronics",
      100,
    ),
    product(
      4,
      "Tablet Air 11\"",
      "Lightweight tablet with M2 chip, 11\" Liquid Retina display, and support for stylus input. Great for artists and students.",
      59_999,
      "/placeholder-tablet.jpg",
      "Electronics",
      35,
    ),
    product(
      5,
      "SmartWatch Series 9",
      "Advanced smartwatch with health monitoring, GPS, and a beautiful always-on display. Water resistant to 50m.",
      44_999,
      "/placeholder-watch.jpg",
      "Electronics",
      60,
    ),
    product(
      6,
      "Classic Cotton T-Shirt",
      "Premium 100% organic cotton t-shirt. Soft, breathable, and available in multiple colors. Unisex regular fit.",
      2_999,
      "/placeholder-tshirt.jpg",
      "Clothing",
      200,
    ),
    product(
      7,
      "Slim Fit Denim Jeans",
      "Classic slim-fit jeans made from premium stretch denim. Comfortable all-day wear with a modern silhouette.",
      6_999,
      "/placeholder-jeans.jpg",
      "Clothing",
      150,
    ),
    product(
      8,
      "Winter Puffer Jacket",
      "Insulated puffer jacket with water-resistant shell. Keeps you warm in temperatures down to -20F. Packable design.",
      18_999,
      "/placeholder-jacket.jpg",
      "Clothing",
      75,
    ),
    product(
      9,
      "Running Sneakers Boost",
      "Lightweight running shoes with responsive cushioning and breathable mesh upper. Great for daily runs and gym workouts.",
      12_999,
      "/placeholder-sneakers.jpg",
      "Clothing",
      120,
    ),
    product(
      10,
      "Learn TypeScript in Depth",
      "Comprehensive guide to TypeScript from beginner to advanced. Covers generics, decorators, and real-world project patterns.",
      4_999,
      "/placeholder-book1.jpg",
      "Books",
      300,
    ),
    product(
      11,
      "The Midnight Library",
      "A beautiful novel about the choices we make and the lives we could have lived. A thought-provoking bestseller.",
      1_699,
      "/placeholder-book2.jpg",
      "Books",
      250,
    ),
    product(
      12,
      "Data Structures & Algorithms",
      "Essential textbook covering fundamental data structures and algorithms. Includes practice problems and solutions.",
      7_999,
      "/placeholder-book3.jpg",
      "Books",
      180,
    ),
  ]
}

pub fn users() -> Result<Vec<MockUser>> {
  Ok(vec![
    MockUser {
      username: "user1".to_string(),
      password_hash: auth_service::hash_password("password123")?,
      role: Role::User,
      token: auth_service::issue_token("user1"),
    },
    MockUser {
      username: "admin".to_string(),
      password_hash: auth_service::hash_password("admin123")?,
      role: Role::Admin,
      token: auth_service::issue_token("admin"),
    },
  ])
}

fn timestamp(rfc3339: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(rfc3339)
    .map(|t| t.with_timezone(&Utc))
    .map_err(|e| AppError::Internal(format!("Invalid seed timestamp '{rfc3339}': {e}")))
}

fn line(product_id: u32, product_name: &str, unit_price_cents: i64, quantity: u32) -> OrderLine {
  OrderLine {
    product_id,
    product_name: product_name.to_string(),
    unit_price_cents,
    quantity,
  }
}

pub fn orders() -> Result<Vec<Order>> {
  Ok(vec![
    Order {
      id: 1001,
      username: "user1".to_string(),
      items: vec![
        line(1, "Pro Laptop 15\"", 129_999, 1),
        line(3, "Wireless Headphones Pro", 34_999, 1),
      ],
      total_cents: 164_998,
      status: OrderStatus::Delivered,
      shipping_address: "123 Main St, San Francisco, CA 94102".to_string(),
      created_at: timestamp("2024-12-15T10:30:00Z")?,
    },
    Order {
      id: 1002,
      username: "user1".to_string(),
      items: vec![
        line(6, "Classic Cotton T-Shirt", 2_999, 3),
        line(7, "Slim Fit Denim Jeans", 6_999, 2),
      ],
      total_cents: 22_995,
      status: OrderStatus::Shipped,
      shipping_address: "456 Oak Ave, New York, NY 10001".to_string(),
      created_at: timestamp("2025-01-10T14:20:00Z")?,
    },
    Order {
      id: 1003,
      username: "user1".to_string(),
      items: vec![line(10, "Learn TypeScript in Depth", 4_999, 1)],
      total_cents: 4_999,
      status: OrderStatus::Processing,
      shipping_address: "789 Pine Rd, Austin, TX 73301".to_string(),
      created_at: timestamp("2025-01-25T09:15:00Z")?,
    },
    Order {
      id: 1004,
      username: "user1".to_string(),
      items: vec![
        line(2, "SmartPhone X12", 89_999, 1),
        line(5, "SmartWatch Series 9", 44_999, 1),
      ],
      total_cents: 134_998,
      status: OrderStatus::Pending,
      shipping_address: "321 Elm St, Seattle, WA 98101".to_string(),
      created_at: timestamp("2025-02-01T16:45:00Z")?,
    },
  ])
}
