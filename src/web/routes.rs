// src/web/routes.rs

use actix_web::web;

use crate::web::handlers::{item_handlers, product_handlers};

/// Liveness probe; reachable without touching the store.
async fn liveness_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().body("product catalog service up")
}

/// Called from `main.rs` to wire all routes into the Actix app. The static
/// `/uploads` mount lives in `main.rs` because it needs the configured
/// upload directory.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/", web::get().to(liveness_handler))
    .service(
      web::scope("/api")
        .service(
          web::resource("/product")
            .route(web::post().to(product_handlers::create_product_handler))
            .route(web::get().to(product_handlers::list_products_handler)),
        )
        .service(
          web::resource("/product/{id}")
            .route(web::put().to(product_handlers::update_product_handler))
            .route(web::delete().to(product_handlers::delete_product_handler)),
        )
        .service(
          web::resource("/items")
            .route(web::post().to(item_handlers::create_item_handler))
            .route(web::get().to(item_handlers::list_items_handler)),
        ),
    );
}
