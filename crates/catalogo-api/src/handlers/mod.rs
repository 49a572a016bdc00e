//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod category;
pub mod health;
pub mod product;
