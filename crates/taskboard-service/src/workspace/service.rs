//! Workspace service — listing and creation.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use taskboard_core::error::AppError;
use taskboard_database::repositories::workspace::WorkspaceRepository;
use taskboard_entity::activity::NewActivity;
use taskboard_entity::workspace::{CreateWorkspace, Workspace};

use crate::activity::ActivityRecorder;
use crate::context::RequestContext;

/// Handles workspace listing and creation.
#[derive(Debug, Clone)]
pub struct WorkspaceService {
    /// Workspace repository.
    workspace_repo: Arc<WorkspaceRepository>,
    /// Activity recorder.
    activity: ActivityRecorder,
}

impl WorkspaceService {
    /// Creates a new workspace service.
    pub fn new(workspace_repo: Arc<WorkspaceRepository>, activity: ActivityRecorder) -> Self {
        Self {
            workspace_repo,
            activity,
        }
    }

    /// Lists the workspaces the acting user belongs to, newest first.
    pub async fn list_for_user(&self, ctx: &RequestContext) -> Result<Vec<Workspace>, AppError> {
        self.workspace_repo.find_for_user(ctx.user_id()).await
    }

    /// Creates a workspace owned by the acting user, who becomes its
    /// first `admin` member in the same transaction.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        name: &str,
        description: Option<&str>,
    ) -> Result<Workspace, AppError> {
        let workspace = self
            .workspace_repo
            .create_with_owner(&CreateWorkspace {
                name: name.to_string(),
                description: description.map(String::from),
                owner_id: ctx.user_id(),
            })
            .await?;

        info!(workspace_id = %workspace.id, user_id = %ctx.user_id(), "Workspace created");
        self.activity
            .record(
                ctx,
                NewActivity {
                    workspace_id: Some(workspace.id),
                    action: "workspace.created".to_string(),
                    details: Some(json!({ "name": workspace.name })),
                    ..NewActivity::default()
                },
            )
            .await;

        Ok(workspace)
    }
}
