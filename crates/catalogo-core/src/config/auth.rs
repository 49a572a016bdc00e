//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and token configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Symmetric secret key for JWT signing (HMAC-SHA256).
    pub jwt_secret: String,
    /// Token issuer claim.
    #[serde(default = "default_issuer")]
    pub jwt_issuer: String,
    /// Token audience claim.
    #[serde(default = "default_audience")]
    pub jwt_audience: String,
    /// Token lifetime in minutes.
    #[serde(default = "default_ttl_minutes")]
    pub jwt_ttl_minutes: u64,
    /// Minimum accepted password length at registration.
    #[serde(default = "default_min_password_len")]
    pub min_password_length: usize,
}

fn default_issuer() -> String {
    "catalogo-api".to_string()
}

fn default_audience() -> String {
    "catalogo-clients".to_string()
}

fn default_ttl_minutes() -> u64 {
    120
}

fn default_min_password_len() -> usize {
    8
}
