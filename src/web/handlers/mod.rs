// src/web/handlers/mod.rs

pub mod item_handlers;
pub mod product_handlers;
