//! # catalogo-api
//!
//! HTTP API layer for Catalogo: axum router, handlers, DTOs, extractors,
//! middleware, and the error-to-response mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use state::AppState;
