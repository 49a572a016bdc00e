//! Unit of work coordinating the catalog repositories over one transaction.

use sqlx::{PgPool, Postgres, Transaction};

use catalogo_core::error::{AppError, ErrorKind};
use catalogo_core::result::AppResult;

use crate::repositories::{CategoryRepository, ProductRepository};

/// Owns a single database transaction for the lifetime of one logical
/// operation (one HTTP request).
///
/// The repository accessors hand out views borrowing that same transaction,
/// so all staged writes across both repositories commit together. The borrow
/// checker enforces what the original pattern left to convention: a view
/// cannot outlive the unit of work, and two requests can never share one.
///
/// Dropping without [`commit`](Self::commit) rolls the transaction back,
/// covering every exit path including errors.
pub struct UnitOfWork {
    tx: Transaction<'static, Postgres>,
}

impl UnitOfWork {
    /// Open a new transaction from the pool.
    pub async fn begin(pool: &PgPool) -> AppResult<Self> {
        let tx = pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;
        Ok(Self { tx })
    }

    /// Category repository bound to this unit of work's transaction.
    pub fn categories(&mut self) -> CategoryRepository<'_> {
        CategoryRepository::new(&mut self.tx)
    }

    /// Product repository bound to this unit of work's transaction.
    pub fn products(&mut self) -> ProductRepository<'_> {
        ProductRepository::new(&mut self.tx)
    }

    /// Commit all staged changes atomically.
    ///
    /// Constraint violations, connectivity loss, and serialization failures
    /// surface here; there is no retry.
    pub async fn commit(self) -> AppResult<()> {
        self.tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })
    }

    /// Roll back explicitly. Equivalent to dropping, but surfaces errors.
    pub async fn rollback(self) -> AppResult<()> {
        self.tx.rollback().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to roll back transaction", e)
        })
    }
}
