//! Request context carrying the authenticated user and session.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use taskboard_entity::session::Session;
use taskboard_entity::user::User;

/// Context for the current authenticated request.
///
/// Built by the auth extractor and passed into service methods so that
/// every operation knows *who* is acting and from *which* session.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The authenticated user.
    pub user: User,
    /// The session backing the bearer token.
    pub session: Session,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user: User, session: Session) -> Self {
        Self {
            user,
            session,
            request_time: Utc::now(),
        }
    }

    /// The acting user's ID.
    pub fn user_id(&self) -> Uuid {
        self.user.id
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.user.role.is_admin()
    }
}
