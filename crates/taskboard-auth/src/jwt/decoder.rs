//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use taskboard_core::config::AuthConfig;
use taskboard_core::error::AppError;

use super::claims::Claims;

/// Validates JWT token signatures and expiration.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
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
        // No leeway: a token whose exp is in the past is always rejected.
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string, checking signature and
    /// expiration. Session liveness is checked separately by the caller.
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::authentication("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::authentication("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::authentication("Invalid token signature")
                    }
                    _ => AppError::authentication(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use uuid::Uuid;

    use taskboard_core::config::{AuthConfig, SessionConfig};
    use taskboard_core::error::ErrorKind;
    use taskboard_entity::user::{User, UserRole};

    use super::super::encoder::JwtEncoder;
    use super::*;

    fn test_user() -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            email: "alice@example.com".to_string(),
            name: "Alice".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::Member,
            avatar_url: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn configs() -> (AuthConfig, SessionConfig) {
        (AuthConfig::default(), SessionConfig::default())
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let (auth, session) = configs();
        let encoder = JwtEncoder::new(&auth, &session);
        let decoder = JwtDecoder::new(&auth);

        let user = test_user();
        let session_id = Uuid::new_v4();
        let (token, _expires_at) = encoder.generate_token(&user, session_id).unwrap();

        let claims = decoder.decode_token(&token).unwrap();
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.role, UserRole::Member);
        assert_eq!(claims.sid, session_id);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_rejected() {
        let (auth, _) = configs();
        let decoder = JwtDecoder::new(&auth);

        let user = test_user();
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            role: user.role,
            sid: Uuid::new_v4(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(auth.jwt_secret.as_bytes()),
        )
        .unwrap();

        let err = decoder.decode_token(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let (auth, session) = configs();
        let encoder = JwtEncoder::new(&auth, &session);

        let other = AuthConfig {
            jwt_secret: "a-completely-different-secret".to_string(),
            ..AuthConfig::default()
        };
        let decoder = JwtDecoder::new(&other);

        let (token, _) = encoder.generate_token(&test_user(), Uuid::new_v4()).unwrap();
        let err = decoder.decode_token(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[test]
    fn test_garbage_token_rejected() {
        let (auth, _) = configs();
        let decoder = JwtDecoder::new(&auth);
        let err = decoder.decode_token("not.a.jwt").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }
}
