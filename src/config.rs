// src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  /// Connection string for the product/item store. Required; no fallback.
  pub database_url: String,
  /// External base address used to build absolute image URLs.
  pub app_base_url: String,
  /// Directory uploaded images are written to and served from.
  pub upload_dir: String,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = env::var("SERVER_PORT")
      .unwrap_or_else(|_| "4000".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = env::var("DATABASE_URL")
      .map_err(|e| AppError::Config(format!("Missing environment variable 'DATABASE_URL': {}", e)))?;
    let app_base_url =
      env::var("APP_BASE_URL").unwrap_or_else(|_| format!("http://{}:{}", server_host, server_port));
    let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      app_base_url,
      upload_dir,
    })
  }
}
