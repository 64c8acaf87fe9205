// src/models/item.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Item {
  pub id: Uuid,
  pub name: String,
  pub quantity: i32,
}

/// Request body for `POST /api/items`. `name` is optional at the transport
/// level so a missing field surfaces as a validation error, not a 400 from
/// the JSON extractor.
#[derive(Debug, Deserialize)]
pub struct NewItem {
  pub name: Option<String>,
  pub quantity: Option<i32>,
}

impl NewItem {
  /// Returns `(name, quantity)` with the quantity defaulted to 0.
  pub fn normalized(&self) -> Result<(String, i32), String> {
    let name = self.name.clone().ok_or_else(|| "name is required".to_string())?;
    Ok((name, self.quantity.unwrap_or(0)))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn quantity_defaults_to_zero() {
    let item = NewItem {
      name: Some("Widget".to_string()),
      quantity: None,
    };
    assert_eq!(item.normalized().unwrap(), ("Widget".to_string(), 0));
  }

  #[test]
  fn missing_name_is_rejected() {
    let item = NewItem {
      name: None,
      quantity: Some(3),
    };
    assert_eq!(item.normalized().unwrap_err(), "name is required");
  }
}
