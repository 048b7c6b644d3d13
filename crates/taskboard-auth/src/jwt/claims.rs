//! JWT claims structure embedded in every session token.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use taskboard_entity::user::UserRole;

/// JWT claims payload.
///
/// The signature only proves the token was issued by this server; the
/// session row referenced by `sid` decides whether the token is still
/// accepted. A revoked session invalidates the token regardless of `exp`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user ID.
    pub sub: Uuid,
    /// User email at the time of token issuance.
    pub email: String,
    /// User role at the time of token issuance.
    pub role: UserRole,
    /// Session ID this token belongs to.
    pub sid: Uuid,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> Uuid {
        self.sub
    }

    /// Returns the session ID.
    pub fn session_id(&self) -> Uuid {
        self.sid
    }
}
