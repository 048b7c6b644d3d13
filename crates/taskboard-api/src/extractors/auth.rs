//! `AuthUser` extractor — pulls the bearer token from the Authorization
//! header, validates it, and injects the request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use taskboard_core::error::AppError;
use taskboard_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
///
/// Also keeps the raw bearer token so logout can revoke the session it
/// belongs to.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The validated request context.
    pub context: RequestContext,
    /// The raw bearer token the request carried.
    pub token: String,
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.context
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        let authenticated = state.session_manager.validate_token(token).await?;

        Ok(AuthUser {
            context: RequestContext::new(authenticated.user, authenticated.session),
            token: token.to_string(),
        })
    }
}
