//! Session lifecycle manager — register, login, logout, and validation.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use taskboard_core::config::AuthConfig;
use taskboard_core::error::AppError;
use taskboard_database::repositories::user::UserRepository;
use taskboard_entity::session::Session;
use taskboard_entity::user::{CreateUser, User, UserRole};

use crate::jwt::{JwtDecoder, JwtEncoder};
use crate::password::PasswordHasher;

use super::store::SessionStore;

/// Result of a successful registration or login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// Signed session token.
    pub token: String,
    /// Created session.
    pub session: Session,
    /// The authenticated user.
    pub user: User,
}

/// The verified identity behind a bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedRequest {
    /// The authenticated user.
    pub user: User,
    /// The session backing the token.
    pub session: Session,
}

/// Manages the complete session lifecycle.
///
/// The session store is the source of truth for revocation: every request
/// validation hits it, so logout and admin revocation take effect on the
/// next request even for tokens whose signature and `exp` are still valid.
#[derive(Clone)]
pub struct SessionManager {
    /// JWT encoder for token generation.
    jwt_encoder: Arc<JwtEncoder>,
    /// JWT decoder for token validation.
    jwt_decoder: Arc<JwtDecoder>,
    /// Session persistence.
    session_store: Arc<SessionStore>,
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    password_hasher: Arc<PasswordHasher>,
    /// Auth configuration.
    auth_config: AuthConfig,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("auth_config", &self.auth_config)
            .finish()
    }
}

impl SessionManager {
    /// Creates a new session manager with all required dependencies.
    pub fn new(
        jwt_encoder: Arc<JwtEncoder>,
        jwt_decoder: Arc<JwtDecoder>,
        session_store: Arc<SessionStore>,
        user_repo: Arc<UserRepository>,
        password_hasher: Arc<PasswordHasher>,
        auth_config: AuthConfig,
    ) -> Self {
        Self {
            jwt_encoder,
            jwt_decoder,
            session_store,
            user_repo,
            password_hasher,
            auth_config,
        }
    }

    /// Registers a new member account and logs it in.
    ///
    /// Fails with Validation when the email is taken or the password is
    /// shorter than the configured minimum.
    pub async fn register(
        &self,
        email: &str,
        name: &str,
        password: &str,
    ) -> Result<LoginResult, AppError> {
        if password.len() < self.auth_config.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.auth_config.password_min_length
            )));
        }

        if self.user_repo.email_exists(email).await? {
            return Err(AppError::validation("Email already registered"));
        }

        let password_hash = self.password_hasher.hash_password(password)?;
        let user = self
            .user_repo
            .create(&CreateUser {
                email: email.to_string(),
                name: name.to_string(),
                password_hash,
                role: UserRole::Member,
            })
            .await?;

        info!(user_id = %user.id, "User registered");
        self.open_session(user).await
    }

    /// Performs the login flow: credential check, active-account check,
    /// session creation, token issuance.
    ///
    /// A wrong email and a wrong password produce the same error, so the
    /// response does not reveal which accounts exist.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid email or password"))?;

        if !self
            .password_hasher
            .verify_password(password, &user.password_hash)?
        {
            warn!(user_id = %user.id, "Failed login attempt");
            return Err(AppError::authentication("Invalid email or password"));
        }

        if !user.is_active {
            return Err(AppError::authentication("Account is deactivated"));
        }

        info!(user_id = %user.id, "User logged in");
        self.open_session(user).await
    }

    /// Creates a session row and its matching token for a user.
    async fn open_session(&self, user: User) -> Result<LoginResult, AppError> {
        let session_id = Uuid::new_v4();
        let (token, expires_at) = self.jwt_encoder.generate_token(&user, session_id)?;
        let session = self
            .session_store
            .create_session(session_id, user.id, &token, expires_at)
            .await?;

        Ok(LoginResult {
            token,
            session,
            user,
        })
    }

    /// Validates a bearer token end to end: signature, expiration, live
    /// session, matching session id, active user.
    pub async fn validate_token(&self, token: &str) -> Result<AuthenticatedRequest, AppError> {
        let claims = self.jwt_decoder.decode_token(token)?;

        let session = self
            .session_store
            .find_by_token(token)
            .await?
            .ok_or_else(|| AppError::authentication("Session has expired or been revoked"))?;

        if session.id != claims.session_id() || session.user_id != claims.user_id() {
            warn!(session_id = %session.id, "Token claims do not match session");
            return Err(AppError::authentication("Session mismatch"));
        }

        let user = self
            .user_repo
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| AppError::authentication("User no longer exists"))?;

        if !user.is_active {
            return Err(AppError::authentication("Account is deactivated"));
        }

        Ok(AuthenticatedRequest { user, session })
    }

    /// Logs out the session behind a token. Succeeds even when the session
    /// is already gone, so logout is idempotent.
    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        let revoked = self.session_store.revoke_by_token(token).await?;
        if revoked {
            info!("Session revoked");
        }
        Ok(())
    }

    /// Revokes every session of a user, e.g. after deactivation.
    pub async fn revoke_all_for_user(&self, user_id: Uuid) -> Result<u64, AppError> {
        let removed = self.session_store.revoke_all_for_user(user_id).await?;
        if removed > 0 {
            info!(%user_id, removed, "All user sessions revoked");
        }
        Ok(removed)
    }

    /// Removes expired session rows.
    pub async fn cleanup_expired(&self) -> Result<u64, AppError> {
        let removed = self.session_store.cleanup_expired().await?;
        if removed > 0 {
            info!(removed, at = %Utc::now(), "Expired sessions removed");
        }
        Ok(removed)
    }
}
