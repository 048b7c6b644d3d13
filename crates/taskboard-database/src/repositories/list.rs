//! List repository implementation.

use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use taskboard_core::error::{AppError, ErrorKind};
use taskboard_core::result::AppResult;
use taskboard_entity::list::{CreateList, List, UpdateList};

/// Repository for list CRUD and ordering queries.
#[derive(Debug, Clone)]
pub struct ListRepository {
    pool: PgPool,
}

impl ListRepository {
    /// Create a new list repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a list by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<List>> {
        sqlx::query_as::<_, List>("SELECT * FROM lists WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find list", e))
    }

    /// List non-archived lists of a board in display order. Position ties
    /// are broken by creation time, then id, so the order is deterministic.
    pub async fn find_for_board(&self, board_id: Uuid) -> AppResult<Vec<List>> {
        sqlx::query_as::<_, List>(
            "SELECT * FROM lists WHERE board_id = $1 AND is_archived = FALSE \
             ORDER BY position, created_at, id",
        )
        .bind(board_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list board lists", e))
    }

    /// Create a list. Without an explicit position the list is appended
    /// after the current siblings (position = sibling count).
    pub async fn create(&self, data: &CreateList) -> AppResult<List> {
        let position = match data.position {
            Some(p) => p,
            None => {
                let count: i64 =
                    sqlx::query_scalar("SELECT COUNT(*) FROM lists WHERE board_id = $1")
                        .bind(data.board_id)
                        .fetch_one(&self.pool)
                        .await
                        .map_err(|e| {
                            AppError::with_source(ErrorKind::Database, "Failed to count lists", e)
                        })?;
                count as i32
            }
        };

        sqlx::query_as::<_, List>(
            "INSERT INTO lists (board_id, name, position) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(data.board_id)
        .bind(&data.name)
        .bind(position)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create list", e))
    }

    /// Apply a partial update, emitting assignments only for present
    /// fields. Returns the updated row, or NotFound for an unknown id.
    pub async fn update(&self, id: Uuid, update: &UpdateList) -> AppResult<List> {
        if update.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("List {id} not found")));
        }

        let mut builder: QueryBuilder<sqlx::Postgres> = QueryBuilder::new("UPDATE lists SET ");
        let mut assignments = builder.separated(", ");
        if let Some(name) = &update.name {
            assignments.push("name = ").push_bind_unseparated(name);
        }
        if let Some(position) = update.position {
            assignments
                .push("position = ")
                .push_bind_unseparated(position);
        }
        assignments.push("updated_at = NOW()");
        builder.push(" WHERE id = ").push_bind(id);
        builder.push(" RETURNING *");

        builder
            .build_query_as::<List>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update list", e))?
            .ok_or_else(|| AppError::not_found(format!("List {id} not found")))
    }
}
