// src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Route-facing message strings attached to errors as `context`.
///
/// Clients key off these exact strings, so they live in one place instead of
/// being scattered across handlers and repositories.
pub mod context {
  pub const CREATE_PRODUCT: &str = "Failed to create item.";
  pub const LIST_PRODUCTS: &str = "Failed to retrieve items.";
  pub const UPDATE_PRODUCT: &str = "Failed to update item.";
  pub const DELETE_PRODUCT: &str = "Failed to delete item.";
  pub const ITEMS: &str = "Failed";
  pub const SCHEMA: &str = "Failed to initialize schema.";
}

#[derive(Debug, Error)]
pub enum AppError {
  /// A required field is missing or malformed in the request body.
  #[error("{context}: {details}")]
  Validation { context: &'static str, details: String },

  /// The path identifier is not a syntactically valid product id.
  #[error("Invalid Product ID format")]
  InvalidId,

  /// The identifier is valid but matches no record.
  #[error("{0}")]
  NotFound(&'static str),

  /// The underlying store failed (connectivity or query error).
  #[error("{context}: {source}")]
  Store {
    context: &'static str,
    #[source]
    source: sqlx::Error,
  },

  /// Writing an uploaded file to disk failed.
  #[error("{context}: {source}")]
  Upload {
    context: &'static str,
    #[source]
    source: std::io::Error,
  },

  /// The multipart body could not be read.
  ///
  /// The underlying `MultipartError` is flattened to a string so `AppError`
  /// stays `Send + Sync` and convertible into `anyhow::Error`.
  #[error("{context}: {details}")]
  Multipart { context: &'static str, details: String },

  #[error("Configuration Error: {0}")]
  Config(String),
}

impl AppError {
  pub fn validation(context: &'static str, details: impl Into<String>) -> Self {
    AppError::Validation {
      context,
      details: details.into(),
    }
  }

  /// Adapter for `map_err` on sqlx calls: `.map_err(AppError::store(ctx))`.
  pub fn store(context: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
    move |source| AppError::Store { context, source }
  }

  pub fn upload(context: &'static str) -> impl FnOnce(std::io::Error) -> Self {
    move |source| AppError::Upload { context, source }
  }

  pub fn multipart(context: &'static str) -> impl FnOnce(actix_multipart::MultipartError) -> Self {
    move |source| AppError::Multipart {
      context,
      details: source.to_string(),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation { .. } => StatusCode::BAD_REQUEST,
      AppError::InvalidId => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
      AppError::Upload { .. } => StatusCode::INTERNAL_SERVER_ERROR,
      AppError::Multipart { .. } => StatusCode::BAD_REQUEST,
      AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error once, where it becomes a response.
    tracing::error!(application_error = %self, "Responding with error");
    let body = match self {
      AppError::Validation { context, details } => json!({ "message": context, "details": details }),
      AppError::InvalidId => json!({ "message": "Invalid Product ID format" }),
      AppError::NotFound(what) => json!({ "message": what }),
      AppError::Store { context, source } => json!({ "message": context, "details": source.to_string() }),
      AppError::Upload { context, source } => json!({ "message": context, "details": source.to_string() }),
      AppError::Multipart { context, details } => json!({ "message": context, "details": details }),
      AppError::Config(details) => json!({ "message": "Configuration issue", "details": details }),
    };
    HttpResponse::build(self.status_code()).json(body)
  }
}

/// Result type alias used throughout the application.
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::body::to_bytes;

  async fn response_json(err: AppError) -> (StatusCode, serde_json::Value) {
    let resp = err.error_response();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body()).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
  }

  #[actix_web::test]
  async fn validation_maps_to_400_with_context_message() {
    let err = AppError::validation(context::CREATE_PRODUCT, "price is required");
    let (status, body) = response_json(err).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Failed to create item.");
    assert_eq!(body["details"], "price is required");
  }

  #[actix_web::test]
  async fn invalid_id_maps_to_400_with_fixed_message() {
    let (status, body) = response_json(AppError::InvalidId).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid Product ID format");
  }

  #[actix_web::test]
  async fn not_found_maps_to_404() {
    let (status, body) = response_json(AppError::NotFound("Product not found")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Product not found");
  }

  #[actix_web::test]
  async fn store_error_maps_to_500_with_details() {
    let err = AppError::store(context::LIST_PRODUCTS)(sqlx::Error::PoolClosed);
    let (status, body) = response_json(err).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to retrieve items.");
    assert!(body["details"].is_string());
  }

  #[actix_web::test]
  async fn upload_error_maps_to_500() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let (status, body) = response_json(AppError::upload(context::CREATE_PRODUCT)(io_err)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to create item.");
  }
}
