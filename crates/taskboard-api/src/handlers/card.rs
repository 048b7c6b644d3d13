//! Card handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use taskboard_entity::card::{MoveCard, UpdateCard};

use crate::dto::request::{MoveCardRequest, UpdateCardRequest};
use crate::dto::response::CardResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// PUT /api/cards/{id}
pub async fn update_card(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(card_id): Path<Uuid>,
    Json(req): Json<UpdateCardRequest>,
) -> Result<Json<CardResponse>, ApiError> {
    let update = UpdateCard {
        title: req.title,
        description: req.description,
        due_date: req.due_date,
        is_completed: req.is_completed,
    };
    let card = state
        .card_service
        .update(&auth.context, card_id, &update)
        .await?;

    Ok(Json(CardResponse { card }))
}

/// PUT /api/cards/{id}/move
pub async fn move_card(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(card_id): Path<Uuid>,
    Json(req): Json<MoveCardRequest>,
) -> Result<Json<CardResponse>, ApiError> {
    let target = MoveCard {
        list_id: req.list_id,
        position: req.position,
    };
    let card = state
        .card_service
        .move_card(&auth.context, card_id, &target)
        .await?;

    Ok(Json(CardResponse { card }))
}
