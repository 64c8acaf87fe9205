// src/state.rs

use crate::config::AppConfig;
use crate::repository::{ItemRepository, ProductRepository};
use crate::uploads::UploadStore;
use std::sync::Arc;

/// Shared per-process state handed to every handler via `web::Data`.
///
/// Repositories and the upload store are cheap to clone (the pool handle is
/// reference-counted); the config is wrapped in an `Arc` once at startup.
#[derive(Clone)]
pub struct AppState {
  pub products: ProductRepository,
  pub items: ItemRepository,
  pub uploads: UploadStore,
  pub config: Arc<AppConfig>,
}
