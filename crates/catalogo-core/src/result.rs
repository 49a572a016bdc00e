//! Convenience result type alias for Catalogo.

use crate::error::AppError;

/// A specialized `Result` type for Catalogo operations.
pub type AppResult<T> = Result<T, AppError>;
