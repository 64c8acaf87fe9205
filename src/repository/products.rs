// src/repository/products.rs

use chrono::Utc;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::errors::{context, AppError, Result};
use crate::models::{Product, ProductDraft};

const PRODUCT_COLUMNS: &str = "id, name, price, description, category, image, available, created_at";

#[derive(Debug, Clone)]
pub struct ProductRepository {
  pool: PgPool,
}

impl ProductRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  /// Validates the draft and inserts a new product with a fresh id and
  /// creation timestamp. The image value defaults to an empty string when
  /// the caller resolved none.
  #[instrument(name = "repo::create_product", skip(self, draft))]
  pub async fn create(&self, draft: ProductDraft) -> Result<Product> {
    let fields = draft
      .validate()
      .map_err(|details| AppError::validation(context::CREATE_PRODUCT, details))?;

    let product = Product {
      id: Uuid::new_v4(),
      name: fields.name,
      price: fields.price,
      description: fields.description,
      category: fields.category,
      image: draft.image.unwrap_or_default(),
      available: draft.available.unwrap_or(true),
      created_at: Utc::now(),
    };

    sqlx::query(
      "INSERT INTO products (id, name, price, description, category, image, available, created_at)
       VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
    )
    .bind(product.id)
    .bind(&product.name)
    .bind(product.price)
    .bind(&product.description)
    .bind(&product.category)
    .bind(&product.image)
    .bind(product.available)
    .bind(product.created_at)
    .execute(&self.pool)
    .await
    .map_err(AppError::store(context::CREATE_PRODUCT))?;

    Ok(product)
  }

  /// Returns the full collection, unordered and unpaginated.
  #[instrument(name = "repo::find_all_products", skip(self))]
  pub async fn find_all(&self) -> Result<Vec<Product>> {
    sqlx::query_as(&format!("SELECT {} FROM products", PRODUCT_COLUMNS))
      .fetch_all(&self.pool)
      .await
      .map_err(AppError::store(context::LIST_PRODUCTS))
  }

  /// Full-field replace of the product with `id`. Stored `image` and
  /// `available` values are kept when the draft carries none, so a partial
  /// form cannot silently null an image or flip availability.
  #[instrument(name = "repo::update_product", skip(self, draft), fields(product_id = %id))]
  pub async fn update_by_id(&self, id: Uuid, draft: ProductDraft) -> Result<Product> {
    let fields = draft
      .validate()
      .map_err(|details| AppError::validation(context::UPDATE_PRODUCT, details))?;

    let updated: Option<Product> = sqlx::query_as(&format!(
      "UPDATE products
       SET name = $1, price = $2, description = $3, category = $4,
           available = COALESCE($5, available),
           image = COALESCE($6, image)
       WHERE id = $7
       RETURNING {}",
      PRODUCT_COLUMNS
    ))
    .bind(&fields.name)
    .bind(fields.price)
    .bind(&fields.description)
    .bind(&fields.category)
    .bind(draft.available)
    .bind(draft.image.as_deref())
    .bind(id)
    .fetch_optional(&self.pool)
    .await
    .map_err(AppError::store(context::UPDATE_PRODUCT))?;

    updated.ok_or(AppError::NotFound("Product not found"))
  }

  /// Deletes the product with `id`; a second delete on the same id reports
  /// NotFound.
  #[instrument(name = "repo::delete_product", skip(self), fields(product_id = %id))]
  pub async fn delete_by_id(&self, id: Uuid) -> Result<()> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(AppError::store(context::DELETE_PRODUCT))?;

    if result.rows_affected() == 0 {
      return Err(AppError::NotFound("Product not found"));
    }
    Ok(())
  }

  /// Removes every product. Used by the seed utility before repopulating.
  #[instrument(name = "repo::delete_all_products", skip(self))]
  pub async fn delete_all(&self) -> Result<u64> {
    let result = sqlx::query("DELETE FROM products")
      .execute(&self.pool)
      .await
      .map_err(AppError::store(context::DELETE_PRODUCT))?;
    Ok(result.rows_affected())
  }
}
