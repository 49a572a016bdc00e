//! # catalogo-entity
//!
//! Entity models for the catalog (categories, products) and auth (users),
//! plus the explicit validation functions invoked on every write path.

pub mod category;
pub mod product;
pub mod user;
pub mod validate;

pub use category::{Category, CategoryDraft, CategoryWithProducts};
pub use product::{Product, ProductDraft};
pub use user::{NewUser, User};
pub use validate::FieldViolation;
