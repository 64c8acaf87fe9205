// src/uploads.rs

//! Filesystem store for uploaded images.
//!
//! Files are written under a single directory with a collision-resistant
//! name (`<unix-millis>-<random>-<original-name>`); the directory itself is
//! served read-only under `/uploads` by the HTTP layer.

use chrono::Utc;
use rand::Rng;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Clone)]
pub struct UploadStore {
  dir: PathBuf,
}

impl UploadStore {
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }

  pub fn dir(&self) -> &Path {
    &self.dir
  }

  /// Persists `data` under a fresh unique name and returns that name.
  ///
  /// The destination directory is created if absent (idempotent). No size or
  /// content-type checks are performed, and the original name is used as-is;
  /// filesystem errors propagate without retry.
  pub async fn store(&self, data: &[u8], original_name: &str) -> io::Result<String> {
    fs::create_dir_all(&self.dir).await?;
    let filename = unique_name(original_name);
    fs::write(self.dir.join(&filename), data).await?;
    tracing::debug!(filename = %filename, bytes = data.len(), "Stored uploaded file");
    Ok(filename)
  }
}

fn unique_name(original_name: &str) -> String {
  let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);
  format!("{}-{}-{}", Utc::now().timestamp_millis(), suffix, original_name)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn store_writes_file_and_returns_name() {
    let dir = tempfile::tempdir().unwrap();
    let store = UploadStore::new(dir.path());

    let name = store.store(b"jpeg bytes", "mug.jpg").await.unwrap();
    let written = std::fs::read(dir.path().join(&name)).unwrap();
    assert_eq!(written, b"jpeg bytes");
  }

  #[tokio::test]
  async fn stored_name_keeps_original_suffix_with_unique_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let store = UploadStore::new(dir.path());

    let name = store.store(b"x", "mug.jpg").await.unwrap();
    assert!(name.ends_with("-mug.jpg"));
    let mut parts = name.splitn(3, '-');
    assert!(parts.next().unwrap().parse::<i64>().is_ok());
    assert!(parts.next().unwrap().parse::<u32>().is_ok());
    assert_eq!(parts.next().unwrap(), "mug.jpg");
  }

  #[tokio::test]
  async fn same_original_name_yields_distinct_files() {
    let dir = tempfile::tempdir().unwrap();
    let store = UploadStore::new(dir.path());

    let first = store.store(b"a", "photo.png").await.unwrap();
    let second = store.store(b"b", "photo.png").await.unwrap();
    assert_ne!(first, second);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
  }

  #[tokio::test]
  async fn missing_directory_is_created_on_first_store() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("uploads");
    let store = UploadStore::new(&nested);

    store.store(b"x", "a.jpg").await.unwrap();
    assert!(nested.is_dir());
  }
}
