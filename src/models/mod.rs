// src/models/mod.rs

//! Data structures representing store entities and per-endpoint inputs.

pub mod item;
pub mod product;

pub use item::{Item, NewItem};
pub use product::{Product, ProductDraft, ProductFields};
