//! # catalogo-core
//!
//! Core error handling, configuration schemas, pagination types, and the
//! generic repository contract shared by every Catalogo crate.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
