//! Session storage operations wrapping the database repository.
//!
//! Tokens are hashed with SHA-256 before they touch the database, so a
//! leaked sessions table cannot be replayed as bearer tokens.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use taskboard_core::error::AppError;
use taskboard_database::repositories::session::SessionRepository;
use taskboard_entity::session::Session;

/// Abstracts session persistence operations.
#[derive(Debug, Clone)]
pub struct SessionStore {
    /// Session database repository.
    repo: Arc<SessionRepository>,
}

impl SessionStore {
    /// Creates a new session store.
    pub fn new(repo: Arc<SessionRepository>) -> Self {
        Self { repo }
    }

    /// Creates a new session record for the given token.
    pub async fn create_session(
        &self,
        session_id: Uuid,
        user_id: Uuid,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<Session, AppError> {
        self.repo
            .create(session_id, user_id, &hash_token(token), expires_at)
            .await
    }

    /// Looks up the live session backing a token, if any.
    pub async fn find_by_token(&self, token: &str) -> Result<Option<Session>, AppError> {
        self.repo.find_valid_by_token_hash(&hash_token(token)).await
    }

    /// Removes the session backing a token. Returns whether one existed.
    pub async fn revoke_by_token(&self, token: &str) -> Result<bool, AppError> {
        self.repo.delete_by_token_hash(&hash_token(token)).await
    }

    /// Removes every session for a user. Returns the number removed.
    pub async fn revoke_all_for_user(&self, user_id: Uuid) -> Result<u64, AppError> {
        self.repo.delete_all_for_user(user_id).await
    }

    /// Removes expired sessions. Returns the number removed.
    pub async fn cleanup_expired(&self) -> Result<u64, AppError> {
        self.repo.cleanup_expired().await
    }
}

/// Hex-encoded SHA-256 digest of a token, the at-rest representation.
fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_token_is_hex_sha256() {
        let hash = hash_token("abc");
        assert_eq!(hash.len(), 64);
        assert_eq!(
            hash,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_hash_token_distinct_inputs() {
        assert_ne!(hash_token("token-a"), hash_token("token-b"));
    }
}
