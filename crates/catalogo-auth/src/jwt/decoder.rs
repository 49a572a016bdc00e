//! JWT token validation.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use catalogo_core::config::AuthConfig;
use catalogo_core::error::AppError;

use super::claims::Claims;

/// Validates bearer tokens issued by [`super::encoder::JwtEncoder`].
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // seconds of clock-skew tolerance
        validation.set_issuer(&[&config.jwt_issuer]);
        validation.set_audience(&[&config.jwt_audience]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decode and validate a bearer token string.
    ///
    /// Checks signature, expiration, issuer, and audience.
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::unauthorized("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::unauthorized("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::unauthorized("Invalid token signature")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidIssuer => {
                        AppError::unauthorized("Invalid token issuer")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidAudience => {
                        AppError::unauthorized("Invalid token audience")
                    }
                    _ => AppError::unauthorized(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use uuid::Uuid;

    fn auth_config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            jwt_issuer: "catalogo-api".to_string(),
            jwt_audience: "catalogo-clients".to_string(),
            jwt_ttl_minutes: 60,
            min_password_length: 8,
        }
    }

    #[test]
    fn roundtrip_preserves_claims() {
        let config = auth_config("test-secret-test-secret-test-secret");
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let user_id = Uuid::new_v4();
        let issued = encoder.generate_token(user_id, "ana@example.com").unwrap();
        let claims = decoder.decode_token(&issued.token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.user_id(), user_id);
        assert_eq!(claims.email, "ana@example.com");
        assert_eq!(claims.iss, "catalogo-api");
        assert_eq!(claims.aud, "catalogo-clients");
        assert!(!claims.is_expired());
        assert_eq!(claims.expires_at().timestamp(), issued.expires_at.timestamp());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let encoder = JwtEncoder::new(&auth_config("secret-one-secret-one-secret-one"));
        let decoder = JwtDecoder::new(&auth_config("secret-two-secret-two-secret-two"));

        let issued = encoder.generate_token(Uuid::new_v4(), "ana@example.com").unwrap();
        let err = decoder.decode_token(&issued.token).unwrap_err();
        assert_eq!(err.kind, catalogo_core::ErrorKind::Unauthorized);
    }

    #[test]
    fn wrong_issuer_is_rejected() {
        let config = auth_config("test-secret-test-secret-test-secret");
        let mut other = config.clone();
        other.jwt_issuer = "someone-else".to_string();

        let issued = JwtEncoder::new(&other)
            .generate_token(Uuid::new_v4(), "ana@example.com")
            .unwrap();
        let err = JwtDecoder::new(&config).decode_token(&issued.token).unwrap_err();
        assert_eq!(err.kind, catalogo_core::ErrorKind::Unauthorized);
        assert!(err.message.contains("issuer"));
    }

    #[test]
    fn wrong_audience_is_rejected() {
        let config = auth_config("test-secret-test-secret-test-secret");
        let mut other = config.clone();
        other.jwt_audience = "other-clients".to_string();

        let issued = JwtEncoder::new(&other)
            .generate_token(Uuid::new_v4(), "ana@example.com")
            .unwrap();
        let err = JwtDecoder::new(&config).decode_token(&issued.token).unwrap_err();
        assert_eq!(err.kind, catalogo_core::ErrorKind::Unauthorized);
    }

    #[test]
    fn expired_token_is_rejected() {
        let config = auth_config("test-secret-test-secret-test-secret");
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "ana@example.com".to_string(),
            iss: config.jwt_issuer.clone(),
            aud: config.jwt_audience.clone(),
            iat: now - 7200,
            exp: now - 3600,
            jti: Uuid::new_v4(),
        };
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        let err = JwtDecoder::new(&config).decode_token(&token).unwrap_err();
        assert_eq!(err.kind, catalogo_core::ErrorKind::Unauthorized);
        assert!(err.message.contains("expired"));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let decoder = JwtDecoder::new(&auth_config("test-secret-test-secret-test-secret"));
        assert!(decoder.decode_token("not-a-jwt").is_err());
    }
}
