// src/web/handlers/item_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::NewItem;
use crate::state::AppState;

#[instrument(name = "handler::create_item", skip(app_state, payload))]
pub async fn create_item_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<NewItem>,
) -> Result<HttpResponse, AppError> {
  let item = app_state.items.create(payload.into_inner()).await?;
  info!(item_id = %item.id, "Item created");
  Ok(HttpResponse::Created().json(item))
}

#[instrument(name = "handler::list_items", skip(app_state))]
pub async fn list_items_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let items = app_state.items.find_all().await?;
  info!("Fetched {} items", items.len());
  Ok(HttpResponse::Ok().json(items))
}
