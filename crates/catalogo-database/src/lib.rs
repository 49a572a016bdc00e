//! # catalogo-database
//!
//! PostgreSQL connection management, concrete repository implementations,
//! and the unit of work that shares one transaction across them.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod unit_of_work;

pub use connection::DatabasePool;
pub use unit_of_work::UnitOfWork;
