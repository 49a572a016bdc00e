//! Concrete repository implementations.
//!
//! `CategoryRepository` and `ProductRepository` are views over a single
//! database session owned by the [`crate::unit_of_work::UnitOfWork`];
//! `UserRepository` operates directly on the pool since authentication sits
//! outside the catalog's commit boundary.

pub mod category;
pub mod product;
pub mod user;

pub use category::CategoryRepository;
pub use product::ProductRepository;
pub use user::UserRepository;

use catalogo_core::error::{AppError, ErrorKind};

/// Map a sqlx error to the application taxonomy.
///
/// Unique and foreign-key violations become conflicts so callers get a 409
/// instead of a bare engine error; everything else stays a database error
/// with the source preserved.
pub(crate) fn map_db_err(context: &'static str, e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db_err) = e {
        match db_err.constraint() {
            Some("products_category_id_fkey") => {
                return AppError::conflict("Referenced category does not exist or is still in use");
            }
            Some("users_email_key") => {
                return AppError::conflict("Email already registered");
            }
            _ => {}
        }
    }
    AppError::with_source(ErrorKind::Database, context, e)
}
