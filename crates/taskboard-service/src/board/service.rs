//! Board service — board CRUD, the aggregated detail view, and lists.

use std::sync::Arc;

use serde_json::json;
use tracing::info;
use uuid::Uuid;

use taskboard_core::error::AppError;
use taskboard_database::repositories::board::BoardRepository;
use taskboard_database::repositories::card::CardRepository;
use taskboard_database::repositories::list::ListRepository;
use taskboard_database::repositories::workspace::WorkspaceRepository;
use taskboard_entity::activity::NewActivity;
use taskboard_entity::board::view::{BoardDetail, ListWithCards};
use taskboard_entity::board::{Board, CreateBoard};
use taskboard_entity::list::{CreateList, List, UpdateList};

use crate::activity::ActivityRecorder;
use crate::context::RequestContext;

/// Handles boards and their lists.
#[derive(Debug, Clone)]
pub struct BoardService {
    /// Workspace repository, for workspace-level access checks.
    workspace_repo: Arc<WorkspaceRepository>,
    /// Board repository.
    board_repo: Arc<BoardRepository>,
    /// List repository.
    list_repo: Arc<ListRepository>,
    /// Card repository, for the detail aggregation.
    card_repo: Arc<CardRepository>,
    /// Activity recorder.
    activity: ActivityRecorder,
}

impl BoardService {
    /// Creates a new board service.
    pub fn new(
        workspace_repo: Arc<WorkspaceRepository>,
        board_repo: Arc<BoardRepository>,
        list_repo: Arc<ListRepository>,
        card_repo: Arc<CardRepository>,
        activity: ActivityRecorder,
    ) -> Self {
        Self {
            workspace_repo,
            board_repo,
            list_repo,
            card_repo,
            activity,
        }
    }

    /// Lists the non-archived boards of a workspace the acting user
    /// belongs to, newest first.
    pub async fn list_in_workspace(
        &self,
        ctx: &RequestContext,
        workspace_id: Uuid,
    ) -> Result<Vec<Board>, AppError> {
        if !self
            .workspace_repo
            .is_member(workspace_id, ctx.user_id())
            .await?
        {
            return Err(AppError::authorization("Access denied"));
        }
        self.board_repo.find_in_workspace(workspace_id).await
    }

    /// Creates a board in a workspace the acting user belongs to.
    ///
    /// The creator becomes an `admin` board member and the board is
    /// seeded with the three default lists, all in one transaction.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        workspace_id: Uuid,
        name: &str,
        description: Option<&str>,
        background_color: Option<&str>,
    ) -> Result<Board, AppError> {
        if !self
            .workspace_repo
            .is_member(workspace_id, ctx.user_id())
            .await?
        {
            return Err(AppError::authorization("Access denied"));
        }

        let board = self
            .board_repo
            .create_with_defaults(&CreateBoard {
                workspace_id,
                name: name.to_string(),
                description: description.map(String::from),
                background_color: background_color.map(String::from),
                created_by: ctx.user_id(),
            })
            .await?;

        info!(board_id = %board.id, user_id = %ctx.user_id(), "Board created");
        self.activity
            .record(
                ctx,
                NewActivity {
                    workspace_id: Some(workspace_id),
                    board_id: Some(board.id),
                    action: "board.created".to_string(),
                    details: Some(json!({ "name": board.name })),
                    ..NewActivity::default()
                },
            )
            .await;

        Ok(board)
    }

    /// Fetches the full board view: board, members, and lists with their
    /// cards in display order.
    ///
    /// Readable by board members, and by anyone when the board is public.
    pub async fn detail(
        &self,
        ctx: &RequestContext,
        board_id: Uuid,
    ) -> Result<BoardDetail, AppError> {
        let board = self.require_read_access(ctx, board_id).await?;

        let members = self.board_repo.members(board_id).await?;
        let lists = self.list_repo.find_for_board(board_id).await?;

        let mut lists_with_cards = Vec::with_capacity(lists.len());
        for list in lists {
            let cards = self.card_repo.details_for_list(list.id).await?;
            lists_with_cards.push(ListWithCards { list, cards });
        }

        Ok(BoardDetail {
            board,
            lists: lists_with_cards,
            members,
        })
    }

    /// Creates a list on a board the acting user is a member of. Without
    /// an explicit position the list is appended after its siblings.
    pub async fn create_list(
        &self,
        ctx: &RequestContext,
        board_id: Uuid,
        name: &str,
        position: Option<i32>,
    ) -> Result<List, AppError> {
        self.require_member(ctx, board_id).await?;

        let list = self
            .list_repo
            .create(&CreateList {
                board_id,
                name: name.to_string(),
                position,
            })
            .await?;

        self.activity
            .record(
                ctx,
                NewActivity {
                    board_id: Some(board_id),
                    action: "list.created".to_string(),
                    details: Some(json!({ "name": list.name })),
                    ..NewActivity::default()
                },
            )
            .await;

        Ok(list)
    }

    /// Applies a partial update (name and/or position) to a list on a
    /// board the acting user is a member of.
    pub async fn update_list(
        &self,
        ctx: &RequestContext,
        list_id: Uuid,
        update: &UpdateList,
    ) -> Result<List, AppError> {
        let list = self
            .list_repo
            .find_by_id(list_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("List {list_id} not found")))?;
        self.require_member(ctx, list.board_id).await?;

        let updated = self.list_repo.update(list_id, update).await?;

        self.activity
            .record(
                ctx,
                NewActivity {
                    board_id: Some(list.board_id),
                    action: "list.updated".to_string(),
                    details: Some(json!({ "name": updated.name })),
                    ..NewActivity::default()
                },
            )
            .await;

        Ok(updated)
    }

    /// Asserts the acting user may mutate the board.
    pub async fn require_member(
        &self,
        ctx: &RequestContext,
        board_id: Uuid,
    ) -> Result<Board, AppError> {
        let board = self
            .board_repo
            .find_by_id(board_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Board {board_id} not found")))?;

        if !self.board_repo.is_member(board_id, ctx.user_id()).await? {
            return Err(AppError::authorization("Access denied"));
        }
        Ok(board)
    }

    /// Asserts the acting user may read the board: membership, or the
    /// board being public.
    async fn require_read_access(
        &self,
        ctx: &RequestContext,
        board_id: Uuid,
    ) -> Result<Board, AppError> {
        let board = self
            .board_repo
            .find_by_id(board_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Board {board_id} not found")))?;

        if !board.is_public && !self.board_repo.is_member(board_id, ctx.user_id()).await? {
            return Err(AppError::authorization("Access denied"));
        }
        Ok(board)
    }
}
