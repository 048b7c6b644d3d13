//! JWT token creation with configurable signing and TTL.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use taskboard_core::config::{AuthConfig, SessionConfig};
use taskboard_core::error::AppError;
use taskboard_entity::user::User;

use super::claims::Claims;

/// Creates signed JWT session tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token TTL in seconds; matched by the session row's `expires_at`.
    ttl_seconds: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth and session configuration.
    pub fn new(auth: &AuthConfig, session: &SessionConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(auth.jwt_secret.as_bytes()),
            ttl_seconds: session.ttl_seconds as i64,
        }
    }

    /// Generates a token for the given user and session, returning it with
    /// its expiration time.
    pub fn generate_token(
        &self,
        user: &User,
        session_id: Uuid,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::seconds(self.ttl_seconds);

        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            role: user.role,
            sid: session_id,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))?;

        Ok((token, expires_at))
    }
}
