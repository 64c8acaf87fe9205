// src/lib.rs

//! Product catalog service: a small CRUD API over products (with uploaded
//! images served as static files) and a secondary item resource.
//!
//! The library exposes the building blocks shared by the two binaries
//! (`catalog-server` and `catalog-seed`): configuration, error types,
//! repositories, the upload store, and the HTTP layer.

pub mod config;
pub mod errors;
pub mod models;
pub mod repository;
pub mod state;
pub mod uploads;
pub mod web;

// Re-exports for the binaries and integration tests.
pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
