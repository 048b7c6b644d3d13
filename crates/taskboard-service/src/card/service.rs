//! Card service — creation, partial updates, and moves.

use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use taskboard_core::error::AppError;
use taskboard_database::repositories::board::BoardRepository;
use taskboard_database::repositories::card::CardRepository;
use taskboard_database::repositories::list::ListRepository;
use taskboard_entity::activity::NewActivity;
use taskboard_entity::card::{Card, CreateCard, MoveCard, UpdateCard};
use taskboard_entity::list::List;

use crate::activity::ActivityRecorder;
use crate::context::RequestContext;

/// Handles card mutations. Access is resolved through the owning list's
/// board: every operation requires board membership.
#[derive(Debug, Clone)]
pub struct CardService {
    /// Board repository, for membership checks.
    board_repo: Arc<BoardRepository>,
    /// List repository, for resolving a card's board.
    list_repo: Arc<ListRepository>,
    /// Card repository.
    card_repo: Arc<CardRepository>,
    /// Activity recorder.
    activity: ActivityRecorder,
}

impl CardService {
    /// Creates a new card service.
    pub fn new(
        board_repo: Arc<BoardRepository>,
        list_repo: Arc<ListRepository>,
        card_repo: Arc<CardRepository>,
        activity: ActivityRecorder,
    ) -> Self {
        Self {
            board_repo,
            list_repo,
            card_repo,
            activity,
        }
    }

    /// Creates a card in a list. Without an explicit position the card is
    /// appended after its siblings.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        list_id: Uuid,
        title: &str,
        description: Option<&str>,
        position: Option<i32>,
    ) -> Result<Card, AppError> {
        let list = self.resolve_list(ctx, list_id).await?;

        let card = self
            .card_repo
            .create(&CreateCard {
                list_id,
                title: title.to_string(),
                description: description.map(String::from),
                position,
                created_by: ctx.user_id(),
            })
            .await?;

        self.activity
            .record(
                ctx,
                NewActivity {
                    board_id: Some(list.board_id),
                    card_id: Some(card.id),
                    action: "card.created".to_string(),
                    details: Some(json!({ "title": card.title })),
                    ..NewActivity::default()
                },
            )
            .await;

        Ok(card)
    }

    /// Applies a partial update to a card.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        card_id: Uuid,
        update: &UpdateCard,
    ) -> Result<Card, AppError> {
        let (card, list) = self.resolve_card(ctx, card_id).await?;

        let updated = self.card_repo.update(card_id, update).await?;

        self.activity
            .record(
                ctx,
                NewActivity {
                    board_id: Some(list.board_id),
                    card_id: Some(card.id),
                    action: "card.updated".to_string(),
                    details: Some(json!({ "title": updated.title })),
                    ..NewActivity::default()
                },
            )
            .await;

        Ok(updated)
    }

    /// Moves a card to a destination list and position. The destination
    /// may be on another board; membership of both boards is required.
    /// Siblings in both lists are renumbered inside the move transaction.
    pub async fn move_card(
        &self,
        ctx: &RequestContext,
        card_id: Uuid,
        target: &MoveCard,
    ) -> Result<Card, AppError> {
        let (card, source_list) = self.resolve_card(ctx, card_id).await?;
        let dest_list = self.resolve_list(ctx, target.list_id).await?;

        let moved = self.card_repo.move_card(card_id, target).await?;

        self.activity
            .record(
                ctx,
                NewActivity {
                    board_id: Some(dest_list.board_id),
                    card_id: Some(card.id),
                    action: "card.moved".to_string(),
                    details: Some(json!({
                        "from_list": source_list.id,
                        "to_list": dest_list.id,
                        "position": moved.position,
                    })),
                    ..NewActivity::default()
                },
            )
            .await;

        Ok(moved)
    }

    /// Resolves a list and asserts board membership for the acting user.
    async fn resolve_list(&self, ctx: &RequestContext, list_id: Uuid) -> Result<List, AppError> {
        let list = self
            .list_repo
            .find_by_id(list_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("List {list_id} not found")))?;

        if !self
            .board_repo
            .is_member(list.board_id, ctx.user_id())
            .await?
        {
            return Err(AppError::authorization("Access denied"));
        }
        Ok(list)
    }

    /// Resolves a card with its owning list, asserting board membership.
    async fn resolve_card(
        &self,
        ctx: &RequestContext,
        card_id: Uuid,
    ) -> Result<(Card, List), AppError> {
        let card = self
            .card_repo
            .find_by_id(card_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Card {card_id} not found")))?;
        let list = self.resolve_list(ctx, card.list_id).await?;
        Ok((card, list))
    }
}
