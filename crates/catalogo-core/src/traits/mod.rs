//! Core traits defined in `catalogo-core` and implemented by other crates.

pub mod repository;

pub use repository::Repository;
