//! Admin handlers — user management and the activity log.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use taskboard_core::types::pagination::PageRequest;
use taskboard_entity::activity::ActivityFilter;

use crate::dto::request::{ActivityQuery, UpdateRoleRequest};
use crate::dto::response::{ActivityResponse, MessageResponse, UsersResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(page): Query<PageRequest>,
) -> Result<Json<UsersResponse>, ApiError> {
    let users = state.admin_service.list_users(&auth.context, &page).await?;
    Ok(Json(UsersResponse { users }))
}

/// PUT /api/admin/users/{id}/role
pub async fn update_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
    Json(req): Json<UpdateRoleRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .admin_service
        .update_role(&auth.context, user_id, &req.role)
        .await?;

    Ok(Json(MessageResponse {
        message: "Role updated".to_string(),
    }))
}

/// PUT /api/admin/users/{id}/deactivate
pub async fn deactivate_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .admin_service
        .deactivate_user(&auth.context, user_id)
        .await?;

    Ok(Json(MessageResponse {
        message: "User deactivated".to_string(),
    }))
}

/// GET /api/admin/activity
pub async fn activity(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ActivityQuery>,
) -> Result<Json<ActivityResponse>, ApiError> {
    let filter = ActivityFilter {
        workspace_id: query.workspace_id,
        board_id: query.board_id,
        user_id: query.user_id,
        limit: query.limit,
    };
    let logs = state.admin_service.activity(&auth.context, &filter).await?;
    Ok(Json(ActivityResponse { logs }))
}
