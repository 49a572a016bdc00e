//! # catalogo-auth
//!
//! Token-based authentication for the Catalogo API: JWT claims, encoder,
//! decoder, and Argon2id password hashing.

pub mod jwt;
pub mod password;

pub use jwt::claims::Claims;
pub use jwt::decoder::JwtDecoder;
pub use jwt::encoder::{IssuedToken, JwtEncoder};
pub use password::PasswordHasher;
