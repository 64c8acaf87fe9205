// src/main.rs

use product_catalog::config::AppConfig;
use product_catalog::errors::{context, AppError};
use product_catalog::repository::{self, ItemRepository, ProductRepository};
use product_catalog::state::AppState;
use product_catalog::uploads::UploadStore;
use product_catalog::web::configure_app_routes;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{web, App, HttpServer};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_span_events(FmtSpan::CLOSE)
    .init();

  tracing::info!("Starting product catalog server...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      std::process::exit(1);
    }
  };

  // The pool is the single long-lived store handle; everything downstream
  // receives a clone of it. An unreachable store at startup is fatal.
  let db_pool = match PgPool::connect(&app_config.database_url).await {
    Ok(pool) => {
      tracing::info!("Successfully connected to the database.");
      pool
    }
    Err(e) => {
      tracing::error!(error = %e, "Failed to connect to the database.");
      std::process::exit(1);
    }
  };

  if let Err(e) = repository::init_schema(&db_pool).await {
    tracing::error!(error = %e, "Failed to initialize database schema.");
    std::process::exit(1);
  }

  // Make sure the static mount point exists before the server starts.
  std::fs::create_dir_all(&app_config.upload_dir)?;

  let app_state = AppState {
    products: ProductRepository::new(db_pool.clone()),
    items: ItemRepository::new(db_pool.clone()),
    uploads: UploadStore::new(&app_config.upload_dir),
    config: app_config.clone(),
  };

  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    let uploads_mount = Files::new("/uploads", app_state.uploads.dir());
    App::new()
      .app_data(web::Data::new(app_state.clone()))
      .app_data(json_config())
      .wrap(tracing_actix_web::TracingLogger::default())
      // The catalog is consumed from browsers on other origins.
      .wrap(Cors::permissive())
      .configure(configure_app_routes)
      // Uploaded images are served read-only, straight from disk.
      .service(uploads_mount)
  })
  .bind(&server_address)?
  .run()
  .await?;

  db_pool.close().await;
  tracing::info!("Server stopped; database pool closed.");
  Ok(())
}

/// Malformed JSON bodies (the item endpoints) get the same `{message,
/// details}` shape as every other error.
fn json_config() -> web::JsonConfig {
  web::JsonConfig::default()
    .error_handler(|err, _req| AppError::validation(context::ITEMS, err.to_string()).into())
}
