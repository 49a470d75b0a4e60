// src/web/routes.rs

use actix_web::web;

use crate::web::handlers::{auth_handlers, cart_handlers, order_handlers, product_handlers};

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Wires every mock endpoint under `/api/v1`; called from `main.rs` (and
/// the integration tests) when building the Actix `App`.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      .route("/health", web::get().to(health_check_handler))
      .service(
        web::scope("/auth")
          .route("/login", web::post().to(auth_handlers::login_handler))
          .route("/register", web::post().to(auth_handlers::register_handler)),
      )
      .service(
        web::scope("/products")
          .route("", web::get().to(product_handlers::list_products_handler))
          .route("", web::post().to(product_handlers::create_product_handler))
          .route("/{product_id}", web::get().to(product_handlers::get_product_handler))
          .route("/{product_id}", web::put().to(product_handlers::update_product_handler))
          .route(
            "/{product_id}",
            web::delete().to(product_handlers::delete_product_handler),
          ),
      )
      .service(
        web::scope("/cart")
          .route("", web::get().to(cart_handlers::get_cart_handler))
          .route("/add", web::post().to(cart_handlers::add_to_cart_handler))
          .route("/update", web::put().to(cart_handlers::update_cart_handler))
          .route("/remove", web::delete().to(cart_handlers::remove_from_cart_handler)),
      )
      .service(
        web::scope("/orders")
          .route("", web::get().to(order_handlers::list_orders_handler))
          .route("/checkout", web::post().to(order_handlers::checkout_handler))
          .route("/{order_id}", web::get().to(order_handlers::get_order_handler))
          .route(
            "/{order_id}/status",
            web::put().to(order_handlers::update_order_status_handler),
          ),
      ),
  );
}
