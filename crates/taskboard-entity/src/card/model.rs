//! Card entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single task unit belonging to exactly one list.
///
/// `position` establishes vertical order within the list. A card moves by
/// re-assigning its `(list_id, position)` pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Card {
    /// Unique card identifier.
    pub id: Uuid,
    /// Owning list.
    pub list_id: Uuid,
    /// Card title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Display position within the list.
    pub position: i32,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Whether the card is marked completed.
    pub is_completed: bool,
    /// Whether the card is archived.
    pub is_archived: bool,
    /// Creating user.
    pub created_by: Uuid,
    /// When the card was created.
    pub created_at: DateTime<Utc>,
    /// When the card was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCard {
    /// Owning list.
    pub list_id: Uuid,
    /// Card title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Explicit position; appended to the end when absent.
    pub position: Option<i32>,
    /// Creating user.
    pub created_by: Uuid,
}

/// Partial update for a card. Only present fields are written; absent
/// fields are left untouched (replaces the original's untyped dynamic
/// JSON field access with an explicit optional-field struct).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCard {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New due date.
    pub due_date: Option<DateTime<Utc>>,
    /// New completion flag.
    pub is_completed: Option<bool>,
}

impl UpdateCard {
    /// Whether any field is present.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.due_date.is_none()
            && self.is_completed.is_none()
    }
}

/// Target of a card move: destination list and position index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveCard {
    /// Destination list.
    pub list_id: Uuid,
    /// Desired position within the destination list; clamped to the
    /// valid range during the move.
    pub position: i32,
}

/// A colored label defined per board and attachable to cards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Label {
    /// Unique label identifier.
    pub id: Uuid,
    /// Owning board.
    pub board_id: Uuid,
    /// Label name.
    pub name: String,
    /// Display color.
    pub color: String,
    /// When the label was created.
    pub created_at: DateTime<Utc>,
}
