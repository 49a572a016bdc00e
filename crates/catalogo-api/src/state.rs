//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use catalogo_auth::jwt::decoder::JwtDecoder;
use catalogo_auth::jwt::encoder::JwtEncoder;
use catalogo_auth::password::PasswordHasher;
use catalogo_core::config::AppConfig;
use catalogo_database::repositories::UserRepository;
use catalogo_database::DatabasePool;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Everything here is
/// read-only after startup; per-request mutable state lives in the unit of
/// work each handler opens against the pool.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL pool handle.
    pub db: DatabasePool,
    /// User repository (outside the catalog unit of work).
    pub user_repo: UserRepository,
    /// JWT token encoder.
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher (Argon2id).
    pub password_hasher: Arc<PasswordHasher>,
}

impl AppState {
    /// Wire up the state from configuration and a connected pool.
    pub fn new(config: AppConfig, db: DatabasePool) -> Self {
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let password_hasher = Arc::new(PasswordHasher::new());
        let user_repo = UserRepository::new(db.pool().clone());

        Self {
            config: Arc::new(config),
            db,
            user_repo,
            jwt_encoder,
            jwt_decoder,
            password_hasher,
        }
    }
}
