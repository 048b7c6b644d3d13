//! Workspace handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use taskboard_core::error::AppError;

use crate::dto::request::CreateWorkspaceRequest;
use crate::dto::response::{BoardsResponse, WorkspaceResponse, WorkspacesResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/workspaces
pub async fn list_workspaces(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<WorkspacesResponse>, ApiError> {
    let workspaces = state.workspace_service.list_for_user(&auth.context).await?;
    Ok(Json(WorkspacesResponse { workspaces }))
}

/// POST /api/workspaces
pub async fn create_workspace(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateWorkspaceRequest>,
) -> Result<Json<WorkspaceResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let workspace = state
        .workspace_service
        .create(&auth.context, &req.name, req.description.as_deref())
        .await?;

    Ok(Json(WorkspaceResponse { workspace }))
}

/// GET /api/workspaces/{id}/boards
pub async fn list_boards(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(workspace_id): Path<Uuid>,
) -> Result<Json<BoardsResponse>, ApiError> {
    let boards = state
        .board_service
        .list_in_workspace(&auth.context, workspace_id)
        .await?;
    Ok(Json(BoardsResponse { boards }))
}
