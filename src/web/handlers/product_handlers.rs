// src/web/handlers/product_handlers.rs

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures_util::TryStreamExt;
use serde_json::json;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::{context, AppError};
use crate::models::ProductDraft;
use crate::state::AppState;

// --- Multipart form ---

/// Raw fields of a product create/update form. The `image` field name is
/// shared between the binary part (a file upload) and a plain text fallback
/// (a caller-supplied URL); which one arrived is decided per part by the
/// presence of a filename.
#[derive(Debug, Default)]
pub struct ProductForm {
  pub name: Option<String>,
  pub price: Option<String>,
  pub description: Option<String>,
  pub category: Option<String>,
  pub available: Option<String>,
  pub image_url: Option<String>,
  pub image_file: Option<UploadedFile>,
}

#[derive(Debug)]
pub struct UploadedFile {
  pub original_name: String,
  pub data: Vec<u8>,
}

impl ProductForm {
  /// Parses the `price` text field; absence is left to draft validation.
  fn parsed_price(&self, ctx: &'static str) -> Result<Option<f64>, AppError> {
    match self.price.as_deref() {
      Some(raw) => raw
        .trim()
        .parse::<f64>()
        .map(Some)
        .map_err(|e| AppError::validation(ctx, format!("invalid price '{}': {}", raw, e))),
      None => Ok(None),
    }
  }

  /// FormData transports booleans as strings; anything other than a truthy
  /// string disables the flag. An absent field yields `None`: the create
  /// default (true) and the update behavior (keep the stored flag) are
  /// decided by the repository.
  fn coerced_available(&self) -> Option<bool> {
    self.available.as_deref().map(is_truthy)
  }

  fn into_draft(self, ctx: &'static str, image: Option<String>) -> Result<ProductDraft, AppError> {
    Ok(ProductDraft {
      price: self.parsed_price(ctx)?,
      available: self.coerced_available(),
      name: self.name,
      description: self.description,
      category: self.category,
      image,
    })
  }
}

fn is_truthy(value: &str) -> bool {
  matches!(value, "true" | "1")
}

/// Drains a multipart payload into a [`ProductForm`]. Unknown fields are
/// read and discarded.
async fn read_product_form(mut payload: Multipart, ctx: &'static str) -> Result<ProductForm, AppError> {
  let mut form = ProductForm::default();

  while let Some(mut field) = payload.try_next().await.map_err(AppError::multipart(ctx))? {
    let (name, filename) = {
      let disposition = field.content_disposition();
      (
        disposition.get_name().unwrap_or_default().to_string(),
        disposition.get_filename().map(ToString::to_string),
      )
    };

    let mut data = Vec::new();
    while let Some(chunk) = field.try_next().await.map_err(AppError::multipart(ctx))? {
      data.extend_from_slice(&chunk);
    }

    if name == "image" {
      if let Some(original_name) = filename {
        form.image_file = Some(UploadedFile { original_name, data });
        continue;
      }
    }

    let text = String::from_utf8(data)
      .map_err(|e| AppError::validation(ctx, format!("field '{}' is not valid UTF-8: {}", name, e)))?;
    match name.as_str() {
      "name" => form.name = Some(text),
      "price" => form.price = Some(text),
      "description" => form.description = Some(text),
      "category" => form.category = Some(text),
      "available" => form.available = Some(text),
      "image" => form.image_url = Some(text),
      _ => {}
    }
  }

  Ok(form)
}

/// Materializes the image reference for a form: an uploaded file becomes
/// `<base_url>/uploads/<stored_name>`, otherwise the text fallback is used.
/// `None` means the caller supplied neither.
async fn resolve_image(
  app_state: &AppState,
  form: &ProductForm,
  ctx: &'static str,
) -> Result<Option<String>, AppError> {
  match &form.image_file {
    Some(upload) => {
      let stored = app_state
        .uploads
        .store(&upload.data, &upload.original_name)
        .await
        .map_err(AppError::upload(ctx))?;
      Ok(Some(format!("{}/uploads/{}", app_state.config.app_base_url, stored)))
    }
    None => Ok(form.image_url.clone()),
  }
}

fn parse_product_id(raw: &str) -> Result<Uuid, AppError> {
  Uuid::parse_str(raw).map_err(|_| {
    warn!(raw_id = %raw, "Rejected malformed product id");
    AppError::InvalidId
  })
}

// --- Handler Implementations ---

#[instrument(name = "handler::create_product", skip(app_state, payload))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: Multipart,
) -> Result<HttpResponse, AppError> {
  let form = read_product_form(payload, context::CREATE_PRODUCT).await?;
  // A product always carries an image reference; empty string when the
  // caller supplied neither a file nor a URL.
  let image = resolve_image(&app_state, &form, context::CREATE_PRODUCT)
    .await?
    .unwrap_or_default();
  let draft = form.into_draft(context::CREATE_PRODUCT, Some(image))?;

  let created = app_state.products.create(draft).await?;
  info!(product_id = %created.id, "Product created");
  Ok(HttpResponse::Created().json(created))
}

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = app_state.products.find_all().await?;
  info!("Fetched {} products", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::update_product", skip(app_state, payload), fields(product_id = %path.as_str()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  payload: Multipart,
) -> Result<HttpResponse, AppError> {
  let id = parse_product_id(&path)?;
  let form = read_product_form(payload, context::UPDATE_PRODUCT).await?;
  // `None` preserves the stored image; a fresh upload or a text URL
  // replaces it.
  let image = resolve_image(&app_state, &form, context::UPDATE_PRODUCT).await?;
  let draft = form.into_draft(context::UPDATE_PRODUCT, image)?;

  let updated = app_state.products.update_by_id(id, draft).await?;
  info!(product_id = %updated.id, "Product updated");
  Ok(HttpResponse::Ok().json(updated))
}

#[instrument(name = "handler::delete_product", skip(app_state), fields(product_id = %path.as_str()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let id = parse_product_id(&path)?;
  app_state.products.delete_by_id(id).await?;
  info!(product_id = %id, "Product deleted");
  Ok(HttpResponse::Ok().json(json!({ "message": "Product deleted successfully" })))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn truthy_strings_enable_available() {
    for raw in ["true", "1"] {
      let form = ProductForm {
        available: Some(raw.to_string()),
        ..ProductForm::default()
      };
      assert_eq!(form.coerced_available(), Some(true), "expected '{}' to be truthy", raw);
    }
  }

  #[test]
  fn other_strings_disable_available() {
    for raw in ["false", "0", "yes", ""] {
      let form = ProductForm {
        available: Some(raw.to_string()),
        ..ProductForm::default()
      };
      assert_eq!(form.coerced_available(), Some(false), "expected '{}' to be falsy", raw);
    }
  }

  #[test]
  fn absent_available_is_left_undecided() {
    // The repository supplies the default (create) or keeps the stored
    // value (update).
    assert_eq!(ProductForm::default().coerced_available(), None);
  }

  #[test]
  fn price_parses_from_form_text() {
    let form = ProductForm {
      price: Some(" 10.5 ".to_string()),
      ..ProductForm::default()
    };
    assert_eq!(form.parsed_price(context::CREATE_PRODUCT).unwrap(), Some(10.5));
  }

  #[test]
  fn non_numeric_price_is_a_validation_error() {
    let form = ProductForm {
      price: Some("ten".to_string()),
      ..ProductForm::default()
    };
    let err = form.parsed_price(context::CREATE_PRODUCT).unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));
  }

  #[test]
  fn malformed_product_id_is_invalid_not_missing() {
    assert!(matches!(parse_product_id("not-an-id"), Err(AppError::InvalidId)));
  }

  #[test]
  fn well_formed_product_id_parses() {
    let id = Uuid::new_v4();
    assert_eq!(parse_product_id(&id.to_string()).unwrap(), id);
  }
}
