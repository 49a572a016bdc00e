//! Category entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::product::Product;

/// A product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Surrogate key.
    pub id: i32,
    /// Category name.
    pub name: String,
    /// Image reference for the category.
    pub image_url: String,
}

/// Data required to create or fully replace a category.
///
/// Must pass [`crate::validate::validate_category`] before reaching SQL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDraft {
    /// Category name.
    pub name: String,
    /// Image reference for the category.
    pub image_url: String,
}

/// A category together with its owned products, for the eager listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryWithProducts {
    /// The category itself.
    #[serde(flatten)]
    pub category: Category,
    /// Products belonging to this category.
    pub products: Vec<Product>,
}
