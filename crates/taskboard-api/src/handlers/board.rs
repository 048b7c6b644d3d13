//! Board handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use taskboard_core::error::AppError;

use crate::dto::request::{CreateBoardRequest, CreateListRequest};
use crate::dto::response::{BoardDetailResponse, BoardResponse, ListResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/boards
pub async fn create_board(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateBoardRequest>,
) -> Result<Json<BoardResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let board = state
        .board_service
        .create(
            &auth.context,
            req.workspace_id,
            &req.name,
            req.description.as_deref(),
            req.background_color.as_deref(),
        )
        .await?;

    Ok(Json(BoardResponse { board }))
}

/// GET /api/boards/{id}
pub async fn get_board(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(board_id): Path<Uuid>,
) -> Result<Json<BoardDetailResponse>, ApiError> {
    let detail = state.board_service.detail(&auth.context, board_id).await?;
    Ok(Json(detail))
}

/// POST /api/boards/{id}/lists
pub async fn create_list(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(board_id): Path<Uuid>,
    Json(req): Json<CreateListRequest>,
) -> Result<Json<ListResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let list = state
        .board_service
        .create_list(&auth.context, board_id, &req.name, req.position)
        .await?;

    Ok(Json(ListResponse { list }))
}
