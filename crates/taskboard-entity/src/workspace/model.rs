//! Workspace entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::user::UserRole;

/// Top-level container owning boards and membership.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Workspace {
    /// Unique workspace identifier.
    pub id: Uuid,
    /// Workspace name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Owning user.
    pub owner_id: Uuid,
    /// When the workspace was created.
    pub created_at: DateTime<Utc>,
    /// When the workspace was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Membership row linking a user to a workspace with a role.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WorkspaceMember {
    /// Workspace the membership belongs to.
    pub workspace_id: Uuid,
    /// Member user.
    pub user_id: Uuid,
    /// Role within the workspace.
    pub role: UserRole,
    /// When the membership was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkspace {
    /// Workspace name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Owning user.
    pub owner_id: Uuid,
}
