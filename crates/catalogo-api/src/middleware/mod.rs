//! Tower/axum middleware.

pub mod cors;
pub mod logging;
