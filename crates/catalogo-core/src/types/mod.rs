//! Core type definitions used across the Catalogo workspace.

pub mod pagination;

pub use pagination::{PageRequest, PageResponse};
