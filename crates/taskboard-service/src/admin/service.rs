//! Admin service — user management and the activity log.

use std::str::FromStr;
use std::sync::Arc;

use serde_json::json;
use tracing::info;
use uuid::Uuid;

use taskboard_auth::session::SessionManager;
use taskboard_core::error::AppError;
use taskboard_core::types::pagination::{PageRequest, PageResponse};
use taskboard_database::repositories::activity::ActivityRepository;
use taskboard_database::repositories::user::UserRepository;
use taskboard_entity::activity::{ActivityFilter, ActivityLogEntry, NewActivity};
use taskboard_entity::user::{User, UserRole};

use crate::activity::ActivityRecorder;
use crate::context::RequestContext;

/// Handles administrative user management and activity queries.
///
/// Every method requires the acting user to be an admin; the role check
/// lives here so it holds no matter which route reaches the service.
#[derive(Debug, Clone)]
pub struct AdminService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Activity repository, for admin queries.
    activity_repo: Arc<ActivityRepository>,
    /// Session manager, for revoking sessions on deactivation.
    session_manager: Arc<SessionManager>,
    /// Activity recorder.
    activity: ActivityRecorder,
}

impl AdminService {
    /// Creates a new admin service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        activity_repo: Arc<ActivityRepository>,
        session_manager: Arc<SessionManager>,
        activity: ActivityRecorder,
    ) -> Self {
        Self {
            user_repo,
            activity_repo,
            session_manager,
            activity,
        }
    }

    /// Lists all users with pagination, newest first.
    pub async fn list_users(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> Result<PageResponse<User>, AppError> {
        self.require_admin(ctx)?;
        self.user_repo.find_all(page).await
    }

    /// Changes a user's role. An unknown role string is a Validation
    /// error before any write happens.
    pub async fn update_role(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
        role: &str,
    ) -> Result<(), AppError> {
        self.require_admin(ctx)?;

        let role = UserRole::from_str(role)?;
        self.user_repo.update_role(user_id, role).await?;

        info!(%user_id, role = %role, admin = %ctx.user_id(), "User role changed");
        self.activity
            .record(
                ctx,
                NewActivity {
                    action: "admin.role_changed".to_string(),
                    details: Some(json!({ "user_id": user_id, "role": role })),
                    ..NewActivity::default()
                },
            )
            .await;

        Ok(())
    }

    /// Soft-deactivates a user and revokes every one of their sessions,
    /// so all previously issued tokens stop validating immediately.
    pub async fn deactivate_user(&self, ctx: &RequestContext, user_id: Uuid) -> Result<(), AppError> {
        self.require_admin(ctx)?;

        self.user_repo.deactivate(user_id).await?;
        let revoked = self.session_manager.revoke_all_for_user(user_id).await?;

        info!(%user_id, revoked, admin = %ctx.user_id(), "User deactivated");
        self.activity
            .record(
                ctx,
                NewActivity {
                    action: "admin.user_deactivated".to_string(),
                    details: Some(json!({ "user_id": user_id, "sessions_revoked": revoked })),
                    ..NewActivity::default()
                },
            )
            .await;

        Ok(())
    }

    /// Queries the activity log with optional filters, newest first.
    pub async fn activity(
        &self,
        ctx: &RequestContext,
        filter: &ActivityFilter,
    ) -> Result<Vec<ActivityLogEntry>, AppError> {
        self.require_admin(ctx)?;
        self.activity_repo.search(filter).await
    }

    /// Role gate shared by all admin operations.
    fn require_admin(&self, ctx: &RequestContext) -> Result<(), AppError> {
        if ctx.is_admin() {
            Ok(())
        } else {
            Err(AppError::authorization("Admin access required"))
        }
    }
}
