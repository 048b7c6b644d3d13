//! Workspace repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use taskboard_core::error::{AppError, ErrorKind};
use taskboard_core::result::AppResult;
use taskboard_entity::user::UserRole;
use taskboard_entity::workspace::{CreateWorkspace, Workspace};

/// Repository for workspace CRUD and membership queries.
#[derive(Debug, Clone)]
pub struct WorkspaceRepository {
    pool: PgPool,
}

impl WorkspaceRepository {
    /// Create a new workspace repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List workspaces the given user is a member of, newest first.
    pub async fn find_for_user(&self, user_id: Uuid) -> AppResult<Vec<Workspace>> {
        sqlx::query_as::<_, Workspace>(
            "SELECT w.* FROM workspaces w \
             JOIN workspace_members wm ON w.id = wm.workspace_id \
             WHERE wm.user_id = $1 \
             ORDER BY w.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list workspaces", e))
    }

    /// Create a workspace and register the owner as an admin member,
    /// atomically. A crash cannot leave a workspace without its owner row.
    pub async fn create_with_owner(&self, data: &CreateWorkspace) -> AppResult<Workspace> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let workspace = sqlx::query_as::<_, Workspace>(
            "INSERT INTO workspaces (name, description, owner_id) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.owner_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create workspace", e))?;

        sqlx::query(
            "INSERT INTO workspace_members (workspace_id, user_id, role) VALUES ($1, $2, $3)",
        )
        .bind(workspace.id)
        .bind(data.owner_id)
        .bind(UserRole::Admin)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to add workspace owner", e)
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit workspace creation", e)
        })?;

        Ok(workspace)
    }

    /// Check whether a user is a member of a workspace.
    pub async fn is_member(&self, workspace_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM workspace_members WHERE workspace_id = $1 AND user_id = $2",
        )
        .bind(workspace_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check workspace membership", e)
        })?;
        Ok(count > 0)
    }
}
