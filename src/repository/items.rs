// src/repository/items.rs

use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::errors::{context, AppError, Result};
use crate::models::{Item, NewItem};

/// Items are intentionally minimal: create and list only, no update or
/// delete.
#[derive(Debug, Clone)]
pub struct ItemRepository {
  pool: PgPool,
}

impl ItemRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  #[instrument(name = "repo::create_item", skip(self, new_item))]
  pub async fn create(&self, new_item: NewItem) -> Result<Item> {
    let (name, quantity) = new_item
      .normalized()
      .map_err(|details| AppError::validation(context::ITEMS, details))?;

    let item = Item {
      id: Uuid::new_v4(),
      name,
      quantity,
    };

    sqlx::query("INSERT INTO items (id, name, quantity) VALUES ($1, $2, $3)")
      .bind(item.id)
      .bind(&item.name)
      .bind(item.quantity)
      .execute(&self.pool)
      .await
      .map_err(AppError::store(context::ITEMS))?;

    Ok(item)
  }

  #[instrument(name = "repo::find_all_items", skip(self))]
  pub async fn find_all(&self) -> Result<Vec<Item>> {
    sqlx::query_as("SELECT id, name, quantity FROM items")
      .fetch_all(&self.pool)
      .await
      .map_err(AppError::store(context::ITEMS))
  }
}
