// src/models/product.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: Uuid,
  pub name: String,
  pub price: f64,
  pub description: String,
  pub category: String,
  pub image: String,
  pub available: bool,
  pub created_at: DateTime<Utc>,
}

/// Uncommitted product fields as supplied by a create or update request.
///
/// The four core fields are optional here so the repository can reject their
/// absence with a tagged validation error instead of the transport layer
/// failing on deserialization. `image` and `available` carry the resolved
/// values: `Some` replaces the stored value, `None` preserves it on update
/// (on create, `available` falls back to its default of true).
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
  pub name: Option<String>,
  pub price: Option<f64>,
  pub description: Option<String>,
  pub category: Option<String>,
  pub available: Option<bool>,
  pub image: Option<String>,
}

/// The validated core fields of a draft.
#[derive(Debug, Clone)]
pub struct ProductFields {
  pub name: String,
  pub price: f64,
  pub description: String,
  pub category: String,
}

impl ProductDraft {
  /// Checks the mandatory fields and returns them in validated form.
  ///
  /// `name` must be non-empty after trimming; `price` must be present,
  /// finite and non-negative (form text like "NaN" or "inf" parses as a
  /// valid f64 and has to be rejected here); `description` and `category`
  /// must be present. The same rules apply to create and update (update is
  /// a full-field replace).
  pub fn validate(&self) -> Result<ProductFields, String> {
    let name = self
      .name
      .as_deref()
      .map(str::trim)
      .filter(|n| !n.is_empty())
      .ok_or_else(|| "name is required".to_string())?;
    let price = self.price.ok_or_else(|| "price is required".to_string())?;
    if !price.is_finite() || price < 0.0 {
      return Err("price must be a non-negative number".to_string());
    }
    let description = self
      .description
      .clone()
      .ok_or_else(|| "description is required".to_string())?;
    let category = self
      .category
      .clone()
      .ok_or_else(|| "category is required".to_string())?;

    Ok(ProductFields {
      name: name.to_string(),
      price,
      description,
      category,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn full_draft() -> ProductDraft {
    ProductDraft {
      name: Some("Mug".to_string()),
      price: Some(10.0),
      description: Some("d".to_string()),
      category: Some("Home".to_string()),
      available: Some(true),
      image: Some(String::new()),
    }
  }

  #[test]
  fn valid_draft_passes_and_trims_name() {
    let mut draft = full_draft();
    draft.name = Some("  Mug  ".to_string());
    let fields = draft.validate().unwrap();
    assert_eq!(fields.name, "Mug");
    assert_eq!(fields.price, 10.0);
  }

  #[test]
  fn missing_price_is_rejected() {
    let mut draft = full_draft();
    draft.price = None;
    assert_eq!(draft.validate().unwrap_err(), "price is required");
  }

  #[test]
  fn negative_price_is_rejected() {
    let mut draft = full_draft();
    draft.price = Some(-1.0);
    assert_eq!(draft.validate().unwrap_err(), "price must be a non-negative number");
  }

  #[test]
  fn nan_price_is_rejected() {
    let mut draft = full_draft();
    draft.price = Some(f64::NAN);
    assert_eq!(draft.validate().unwrap_err(), "price must be a non-negative number");
  }

  #[test]
  fn infinite_price_is_rejected() {
    for price in [f64::INFINITY, f64::NEG_INFINITY] {
      let mut draft = full_draft();
      draft.price = Some(price);
      assert_eq!(draft.validate().unwrap_err(), "price must be a non-negative number");
    }
  }

  #[test]
  fn blank_name_is_rejected() {
    let mut draft = full_draft();
    draft.name = Some("   ".to_string());
    assert_eq!(draft.validate().unwrap_err(), "name is required");
  }

  #[test]
  fn missing_description_and_category_are_rejected() {
    let mut draft = full_draft();
    draft.description = None;
    assert_eq!(draft.validate().unwrap_err(), "description is required");

    let mut draft = full_draft();
    draft.category = None;
    assert_eq!(draft.validate().unwrap_err(), "category is required");
  }

  #[test]
  fn product_serializes_created_at_as_camel_case() {
    let product = Product {
      id: Uuid::nil(),
      name: "Mug".to_string(),
      price: 10.0,
      description: "d".to_string(),
      category: "Home".to_string(),
      image: String::new(),
      available: true,
      created_at: Utc::now(),
    };
    let value = serde_json::to_value(&product).unwrap();
    assert!(value.get("createdAt").is_some());
    assert!(value.get("created_at").is_none());
  }
}
