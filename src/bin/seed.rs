// src/bin/seed.rs

//! One-shot seeding utility: clears the product collection and repopulates
//! it with fixed sample data. Run out-of-band, never by the server:
//! `cargo run --bin catalog-seed`. Exits nonzero on any failure.

use anyhow::Context;
use sqlx::PgPool;
use tracing::info;

use product_catalog::config::AppConfig;
use product_catalog::models::ProductDraft;
use product_catalog::repository::{self, ProductRepository};

fn sample_products(base_url: &str) -> Vec<ProductDraft> {
  let image = |file: &str| Some(format!("{}/uploads/{}", base_url, file));
  vec![
    ProductDraft {
      name: Some("iPhone 16 Pro Max".to_string()),
      price: Some(1299.0),
      description: Some("The ultimate iPhone with Titanium design and A18 Pro chip.".to_string()),
      category: Some("Electronics".to_string()),
      available: Some(true),
      image: image("iphone16.jpg"),
    },
    ProductDraft {
      name: Some("Premium Coffee Cup".to_string()),
      price: Some(15.0),
      description: Some("High-quality ceramic cup for your daily brew.".to_string()),
      category: Some("Home & Living".to_string()),
      available: Some(true),
      image: image("coffee.jpg"),
    },
    ProductDraft {
      name: Some("Smart LED TV 4K".to_string()),
      price: Some(499.0),
      description: Some("Experience cinematic colors with this 55-inch Smart TV.".to_string()),
      category: Some("Electronics".to_string()),
      available: Some(true),
      image: image("tv.jpg"),
    },
    ProductDraft {
      name: Some("Abstract Art Print".to_string()),
      price: Some(35.0),
      description: Some("Modern abstract animation art for your wall decor.".to_string()),
      category: Some("Home & Living".to_string()),
      available: Some(true),
      image: image("art.jpg"),
    },
  ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .init();

  let config = AppConfig::from_env().context("loading configuration")?;

  let pool = PgPool::connect(&config.database_url)
    .await
    .context("connecting to the database")?;
  info!("Connected to the database.");

  repository::init_schema(&pool).await.context("initializing schema")?;

  let products = ProductRepository::new(pool.clone());

  let removed = products.delete_all().await.context("clearing existing products")?;
  info!("Cleared {} existing products.", removed);

  let samples = sample_products(&config.app_base_url);
  let total = samples.len();
  for draft in samples {
    let created = products.create(draft).await.context("inserting sample product")?;
    info!(product_id = %created.id, name = %created.name, "Seeded product");
  }
  info!("Successfully added {} sample products.", total);

  pool.close().await;
  info!("Disconnected.");
  Ok(())
}
