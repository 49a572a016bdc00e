//! Product entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A product belonging to exactly one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Surrogate key.
    pub id: i32,
    /// Product name.
    pub name: String,
    /// Product description.
    pub description: String,
    /// Unit price, NUMERIC(10,4) in the database.
    pub price: Decimal,
    /// Image reference for the product.
    pub image_url: String,
    /// Stock quantity.
    pub stock: f32,
    /// When the product was registered, set by the database on insert.
    pub registered_at: DateTime<Utc>,
    /// Owning category.
    pub category_id: i32,
}

/// Data required to create or fully replace a product.
///
/// Must pass [`crate::validate::validate_product`] before reaching SQL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDraft {
    /// Product name.
    pub name: String,
    /// Product description.
    pub description: String,
    /// Unit price.
    pub price: Decimal,
    /// Image reference for the product.
    pub image_url: String,
    /// Stock quantity.
    pub stock: f32,
    /// Owning category.
    pub category_id: i32,
}
