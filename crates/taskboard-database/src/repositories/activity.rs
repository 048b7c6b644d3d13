//! Activity log repository implementation.

use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use taskboard_core::error::{AppError, ErrorKind};
use taskboard_core::result::AppResult;
use taskboard_entity::activity::{ActivityFilter, ActivityLog, ActivityLogEntry, NewActivity};

/// Default number of entries returned by an unfiltered activity query.
const DEFAULT_LIMIT: i64 = 100;

/// Upper bound for the `limit` filter.
const MAX_LIMIT: i64 = 200;

/// Repository for the append-only activity log.
#[derive(Debug, Clone)]
pub struct ActivityRepository {
    pool: PgPool,
}

impl ActivityRepository {
    /// Create a new activity repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record one activity entry.
    pub async fn record(&self, user_id: Uuid, activity: &NewActivity) -> AppResult<ActivityLog> {
        sqlx::query_as::<_, ActivityLog>(
            "INSERT INTO activity_logs (workspace_id, board_id, card_id, user_id, action, details) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(activity.workspace_id)
        .bind(activity.board_id)
        .bind(activity.card_id)
        .bind(user_id)
        .bind(&activity.action)
        .bind(&activity.details)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record activity", e))
    }

    /// Query entries newest first, applying whichever filters are present.
    pub async fn search(&self, filter: &ActivityFilter) -> AppResult<Vec<ActivityLogEntry>> {
        let mut builder: QueryBuilder<sqlx::Postgres> = QueryBuilder::new(
            "SELECT a.id, a.workspace_id, a.board_id, a.card_id, a.user_id, \
                    u.name AS user_name, u.email AS user_email, \
                    a.action, a.details, a.created_at \
             FROM activity_logs a \
             JOIN users u ON u.id = a.user_id \
             WHERE 1 = 1",
        );

        if let Some(workspace_id) = filter.workspace_id {
            builder.push(" AND a.workspace_id = ").push_bind(workspace_id);
        }
        if let Some(board_id) = filter.board_id {
            builder.push(" AND a.board_id = ").push_bind(board_id);
        }
        if let Some(user_id) = filter.user_id {
            builder.push(" AND a.user_id = ").push_bind(user_id);
        }

        let limit = filter
            .limit
            .unwrap_or(DEFAULT_LIMIT)
            .clamp(1, MAX_LIMIT);
        builder.push(" ORDER BY a.created_at DESC, a.id DESC LIMIT ");
        builder.push_bind(limit);

        builder
            .build_query_as::<ActivityLogEntry>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to query activity", e))
    }
}
