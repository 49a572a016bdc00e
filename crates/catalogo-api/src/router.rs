//! Route definitions for the Catalogo HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor. Catalog routes require a bearer token through the
//! `AuthUser` extractor in their handlers; `/autoriza` and `/health` are
//! public.

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(category_routes())
        .merge(product_routes())
        .merge(auth_routes())
        .merge(health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Category CRUD and listings. Static `/categorias/produtos` must be
/// registered alongside the `{id}` matcher; axum routes static segments
/// first.
fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/categorias", get(handlers::category::list))
        .route(
            "/categorias/produtos",
            get(handlers::category::list_with_products),
        )
        .route("/categorias/{id}", get(handlers::category::get))
        .route("/categorias", post(handlers::category::create))
        .route("/categorias/{id}", put(handlers::category::update))
        .route("/categorias/{id}", delete(handlers::category::delete))
}

/// Product CRUD and listings.
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/produtos", get(handlers::product::list))
        .route("/produtos/menorpreco", get(handlers::product::list_by_price))
        .route("/produtos/{id}", get(handlers::product::get))
        .route("/produtos", post(handlers::product::create))
        .route("/produtos/{id}", put(handlers::product::update))
        .route("/produtos/{id}", delete(handlers::product::delete))
}

/// Account creation and token issuance.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/autoriza/register", post(handlers::auth::register))
        .route("/autoriza/login", post(handlers::auth::login))
}

/// Liveness probe.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
