// src/repository/mod.rs

//! Repositories owning all store access. Each one holds a clone of the
//! process-wide pool handed in at construction; nothing reaches for a global
//! connection.

pub mod items;
pub mod products;

pub use items::ItemRepository;
pub use products::ProductRepository;

use crate::errors::{context, AppError, Result};
use sqlx::PgPool;

/// Creates the backing tables when absent. Safe to run repeatedly; both
/// binaries call this right after connecting.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
  sqlx::query(
    "CREATE TABLE IF NOT EXISTS products (
       id UUID PRIMARY KEY,
       name TEXT NOT NULL,
       price DOUBLE PRECISION NOT NULL,
       description TEXT NOT NULL,
       category TEXT NOT NULL,
       image TEXT NOT NULL,
       available BOOLEAN NOT NULL DEFAULT TRUE,
       created_at TIMESTAMPTZ NOT NULL
     )",
  )
  .execute(pool)
  .await
  .map_err(AppError::store(context::SCHEMA))?;

  sqlx::query(
    "CREATE TABLE IF NOT EXISTS items (
       id UUID PRIMARY KEY,
       name TEXT NOT NULL,
       quantity INTEGER NOT NULL DEFAULT 0
     )",
  )
  .execute(pool)
  .await
  .map_err(AppError::store(context::SCHEMA))?;

  Ok(())
}
