//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A server-persisted session binding an issued token to a user.
///
/// The signed token itself is never stored; only a SHA-256 hex digest of
/// it, looked up by exact match during validation. Deleting the row
/// revokes the session even while the token's signature is still valid.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique session identifier (also embedded in the token claims).
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// SHA-256 hex digest of the issued token.
    #[serde(skip_serializing)]
    pub token_hash: String,
    /// Expiry timestamp; the row is dead once this passes.
    pub expires_at: DateTime<Utc>,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
}
