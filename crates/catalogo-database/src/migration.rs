//! Database migration runner.

use sqlx::migrate::Migrator;
use sqlx::PgPool;
use tracing::info;

use catalogo_core::error::{AppError, ErrorKind};
use catalogo_core::result::AppResult;

/// Migrations embedded at compile time from the workspace `migrations/` dir.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Bring the schema up to date, applying any pending migrations in order.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    info!(known = MIGRATOR.migrations.len(), "Checking database schema");

    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Migration failed", e))?;

    info!("Database schema is up to date");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_migration_is_embedded() {
        assert!(!MIGRATOR.migrations.is_empty());
        assert!(MIGRATOR.migrations[0].description.contains("initial"));
    }
}
