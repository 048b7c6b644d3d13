//! List handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use taskboard_core::error::AppError;
use taskboard_entity::list::UpdateList;

use crate::dto::request::{CreateCardRequest, UpdateListRequest};
use crate::dto::response::{CardResponse, ListResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// PUT /api/lists/{id}
pub async fn update_list(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(list_id): Path<Uuid>,
    Json(req): Json<UpdateListRequest>,
) -> Result<Json<ListResponse>, ApiError> {
    let update = UpdateList {
        name: req.name,
        position: req.position,
    };
    let list = state
        .board_service
        .update_list(&auth.context, list_id, &update)
        .await?;

    Ok(Json(ListResponse { list }))
}

/// POST /api/lists/{id}/cards
pub async fn create_card(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(list_id): Path<Uuid>,
    Json(req): Json<CreateCardRequest>,
) -> Result<Json<CardResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let card = state
        .card_service
        .create(
            &auth.context,
            list_id,
            &req.title,
            req.description.as_deref(),
            req.position,
        )
        .await?;

    Ok(Json(CardResponse { card }))
}
