//! Board repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use taskboard_core::error::{AppError, ErrorKind};
use taskboard_core::result::AppResult;
use taskboard_entity::board::view::BoardMemberProfile;
use taskboard_entity::board::{Board, CreateBoard};
use taskboard_entity::board::model::DEFAULT_BACKGROUND_COLOR;
use taskboard_entity::user::UserRole;

/// Names of the lists every new board starts with.
pub const DEFAULT_LIST_NAMES: [&str; 3] = ["To Do", "In Progress", "Done"];

/// Repository for board CRUD and membership queries.
#[derive(Debug, Clone)]
pub struct BoardRepository {
    pool: PgPool,
}

impl BoardRepository {
    /// Create a new board repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a board by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Board>> {
        sqlx::query_as::<_, Board>("SELECT * FROM boards WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find board", e))
    }

    /// List non-archived boards in a workspace, newest first.
    pub async fn find_in_workspace(&self, workspace_id: Uuid) -> AppResult<Vec<Board>> {
        sqlx::query_as::<_, Board>(
            "SELECT * FROM boards WHERE workspace_id = $1 AND is_archived = FALSE \
             ORDER BY created_at DESC",
        )
        .bind(workspace_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list boards", e))
    }

    /// Create a board, register the creator as an admin board member, and
    /// seed the three default lists at positions 0, 1, 2 — all in a single
    /// transaction so a crash cannot leave partial board state.
    pub async fn create_with_defaults(&self, data: &CreateBoard) -> AppResult<Board> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let color = data
            .background_color
            .as_deref()
            .unwrap_or(DEFAULT_BACKGROUND_COLOR);

        let board = sqlx::query_as::<_, Board>(
            "INSERT INTO boards (workspace_id, name, description, background_color, created_by) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(data.workspace_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(color)
        .bind(data.created_by)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create board", e))?;

        sqlx::query("INSERT INTO board_members (board_id, user_id, role) VALUES ($1, $2, $3)")
            .bind(board.id)
            .bind(data.created_by)
            .bind(UserRole::Admin)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to add board creator", e)
            })?;

        for (position, name) in DEFAULT_LIST_NAMES.iter().enumerate() {
            sqlx::query("INSERT INTO lists (board_id, name, position) VALUES ($1, $2, $3)")
                .bind(board.id)
                .bind(name)
                .bind(position as i32)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to create default list", e)
                })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit board creation", e)
        })?;

        Ok(board)
    }

    /// Check whether a user is a member of a board.
    pub async fn is_member(&self, board_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM board_members WHERE board_id = $1 AND user_id = $2",
        )
        .bind(board_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check board membership", e)
        })?;
        Ok(count > 0)
    }

    /// List board members with their user profiles joined in.
    pub async fn members(&self, board_id: Uuid) -> AppResult<Vec<BoardMemberProfile>> {
        sqlx::query_as::<_, BoardMemberProfile>(
            "SELECT u.id, u.name, u.email, u.avatar_url, bm.role \
             FROM users u \
             JOIN board_members bm ON u.id = bm.user_id \
             WHERE bm.board_id = $1 \
             ORDER BY bm.created_at",
        )
        .bind(board_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list board members", e))
    }
}
