//! Card repository implementation.
//!
//! Owns the positional ordering policy: creation appends after the current
//! siblings, and moves renumber affected siblings inside one transaction so
//! `(list_id, position)` pairs stay contiguous and unique under serialized
//! writers.

use std::collections::HashMap;

use sqlx::{FromRow, PgPool, QueryBuilder};
use uuid::Uuid;

use taskboard_core::error::{AppError, ErrorKind};
use taskboard_core::result::AppResult;
use taskboard_entity::board::view::CardDetail;
use taskboard_entity::card::{Card, CreateCard, Label, MoveCard, UpdateCard};
use taskboard_entity::user::UserSummary;

/// Card row with per-card counters, as fetched for the board detail view.
#[derive(Debug, Clone, FromRow)]
struct CardWithCounts {
    #[sqlx(flatten)]
    card: Card,
    comments_count: i64,
    attachments_count: i64,
}

/// Join row for batch-loading card members.
#[derive(Debug, Clone, FromRow)]
struct CardMemberRow {
    card_id: Uuid,
    #[sqlx(flatten)]
    user: UserSummary,
}

/// Join row for batch-loading card labels.
#[derive(Debug, Clone, FromRow)]
struct CardLabelRow {
    card_id: Uuid,
    #[sqlx(flatten)]
    label: Label,
}

/// Repository for card CRUD, the move operation, and detail aggregation.
#[derive(Debug, Clone)]
pub struct CardRepository {
    pool: PgPool,
}

impl CardRepository {
    /// Create a new card repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a card by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Card>> {
        sqlx::query_as::<_, Card>("SELECT * FROM cards WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find card", e))
    }

    /// Create a card. Without an explicit position the card is appended
    /// after the current siblings (position = sibling count).
    pub async fn create(&self, data: &CreateCard) -> AppResult<Card> {
        let position = match data.position {
            Some(p) => p,
            None => {
                let count: i64 =
                    sqlx::query_scalar("SELECT COUNT(*) FROM cards WHERE list_id = $1")
                        .bind(data.list_id)
                        .fetch_one(&self.pool)
                        .await
                        .map_err(|e| {
                            AppError::with_source(ErrorKind::Database, "Failed to count cards", e)
                        })?;
                count as i32
            }
        };

        sqlx::query_as::<_, Card>(
            "INSERT INTO cards (list_id, title, description, position, created_by) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(data.list_id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(position)
        .bind(data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create card", e))
    }

    /// Apply a partial update, emitting assignments only for present
    /// fields. Returns the updated row, or NotFound for an unknown id.
    pub async fn update(&self, id: Uuid, update: &UpdateCard) -> AppResult<Card> {
        if update.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Card {id} not found")));
        }

        let mut builder: QueryBuilder<sqlx::Postgres> = QueryBuilder::new("UPDATE cards SET ");
        let mut assignments = builder.separated(", ");
        if let Some(title) = &update.title {
            assignments.push("title = ").push_bind_unseparated(title);
        }
        if let Some(description) = &update.description {
            assignments
                .push("description = ")
                .push_bind_unseparated(description);
        }
        if let Some(due_date) = update.due_date {
            assignments
                .push("due_date = ")
                .push_bind_unseparated(due_date);
        }
        if let Some(is_completed) = update.is_completed {
            assignments
                .push("is_completed = ")
                .push_bind_unseparated(is_completed);
        }
        assignments.push("updated_at = NOW()");
        builder.push(" WHERE id = ").push_bind(id);
        builder.push(" RETURNING *");

        builder
            .build_query_as::<Card>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update card", e))?
            .ok_or_else(|| AppError::not_found(format!("Card {id} not found")))
    }

    /// Move a card to a (possibly different) list at a target position.
    ///
    /// Runs in one transaction: the source row is locked, the gap it leaves
    /// is closed, the destination range is shifted open, and the card is
    /// written with its new `(list_id, position)`. The target position is
    /// clamped to the valid range for the destination list.
    pub async fn move_card(&self, id: Uuid, target: &MoveCard) -> AppResult<Card> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let source = sqlx::query_as::<_, Card>("SELECT * FROM cards WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to lock card for move", e)
            })?
            .ok_or_else(|| AppError::not_found(format!("Card {id} not found")))?;

        let same_list = source.list_id == target.list_id;

        // Sibling count in the destination, not counting the moving card.
        let dest_count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM cards WHERE list_id = $1 AND id <> $2",
        )
        .bind(target.list_id)
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count destination cards", e)
        })?;

        let position = clamp_position(target.position, dest_count);

        // Close the gap the card leaves in its source list.
        sqlx::query(
            "UPDATE cards SET position = position - 1 \
             WHERE list_id = $1 AND position > $2 AND id <> $3",
        )
        .bind(source.list_id)
        .bind(source.position)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to close source gap", e))?;

        // Open a gap at the target index in the destination list.
        sqlx::query(
            "UPDATE cards SET position = position + 1 \
             WHERE list_id = $1 AND position >= $2 AND id <> $3",
        )
        .bind(target.list_id)
        .bind(position)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to open destination gap", e)
        })?;

        let moved = sqlx::query_as::<_, Card>(
            "UPDATE cards SET list_id = $2, position = $3, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(target.list_id)
        .bind(position)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to move card", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit card move", e)
        })?;

        tracing::debug!(
            card_id = %id,
            from_list = %source.list_id,
            to_list = %target.list_id,
            position,
            same_list,
            "Card moved"
        );

        Ok(moved)
    }

    /// Fetch the non-archived cards of a list in display order, each with
    /// its members, labels, and comment/attachment counts.
    pub async fn details_for_list(&self, list_id: Uuid) -> AppResult<Vec<CardDetail>> {
        let rows = sqlx::query_as::<_, CardWithCounts>(
            "SELECT c.*, \
               (SELECT COUNT(*) FROM comments WHERE card_id = c.id) AS comments_count, \
               (SELECT COUNT(*) FROM attachments WHERE card_id = c.id) AS attachments_count \
             FROM cards c \
             WHERE c.list_id = $1 AND c.is_archived = FALSE \
             ORDER BY c.position, c.created_at, c.id",
        )
        .bind(list_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list cards", e))?;

        let card_ids: Vec<Uuid> = rows.iter().map(|r| r.card.id).collect();
        let mut members = self.members_for_cards(&card_ids).await?;
        let mut labels = self.labels_for_cards(&card_ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| CardDetail {
                members: members.remove(&row.card.id).unwrap_or_default(),
                labels: labels.remove(&row.card.id).unwrap_or_default(),
                comments_count: row.comments_count,
                attachments_count: row.attachments_count,
                card: row.card,
            })
            .collect())
    }

    /// Batch-load assigned members for a set of cards.
    async fn members_for_cards(
        &self,
        card_ids: &[Uuid],
    ) -> AppResult<HashMap<Uuid, Vec<UserSummary>>> {
        if card_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, CardMemberRow>(
            "SELECT cm.card_id, u.id, u.name, u.email, u.avatar_url \
             FROM users u \
             JOIN card_members cm ON u.id = cm.user_id \
             WHERE cm.card_id = ANY($1)",
        )
        .bind(card_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load card members", e))?;

        let mut by_card: HashMap<Uuid, Vec<UserSummary>> = HashMap::new();
        for row in rows {
            by_card.entry(row.card_id).or_default().push(row.user);
        }
        Ok(by_card)
    }

    /// Batch-load labels for a set of cards.
    async fn labels_for_cards(&self, card_ids: &[Uuid]) -> AppResult<HashMap<Uuid, Vec<Label>>> {
        if card_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, CardLabelRow>(
            "SELECT cl.card_id, l.id, l.board_id, l.name, l.color, l.created_at \
             FROM labels l \
             JOIN card_labels cl ON l.id = cl.label_id \
             WHERE cl.card_id = ANY($1)",
        )
        .bind(card_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load card labels", e))?;

        let mut by_card: HashMap<Uuid, Vec<Label>> = HashMap::new();
        for row in rows {
            by_card.entry(row.card_id).or_default().push(row.label);
        }
        Ok(by_card)
    }
}

/// Clamp a requested position to the valid range `[0, sibling_count]`.
fn clamp_position(requested: i32, sibling_count: i64) -> i32 {
    let max = i32::try_from(sibling_count).unwrap_or(i32::MAX);
    requested.clamp(0, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_position_bounds() {
        assert_eq!(clamp_position(-5, 3), 0);
        assert_eq!(clamp_position(1, 3), 1);
        assert_eq!(clamp_position(3, 3), 3);
        assert_eq!(clamp_position(99, 3), 3);
    }

    #[test]
    fn test_clamp_position_empty_list() {
        assert_eq!(clamp_position(7, 0), 0);
        assert_eq!(clamp_position(0, 0), 0);
    }
}
