//! List entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An ordered column of cards belonging to exactly one board.
///
/// `position` establishes left-to-right order among sibling lists; values
/// need not be contiguous, only their relative order matters for display.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct List {
    /// Unique list identifier.
    pub id: Uuid,
    /// Owning board.
    pub board_id: Uuid,
    /// List name.
    pub name: String,
    /// Display position among siblings.
    pub position: i32,
    /// Whether the list is archived.
    pub is_archived: bool,
    /// When the list was created.
    pub created_at: DateTime<Utc>,
    /// When the list was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateList {
    /// Owning board.
    pub board_id: Uuid,
    /// List name.
    pub name: String,
    /// Explicit position; appended to the end when absent.
    pub position: Option<i32>,
}

/// Partial update for a list. Only present fields are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateList {
    /// New name.
    pub name: Option<String>,
    /// New position.
    pub position: Option<i32>,
}

impl UpdateList {
    /// Whether any field is present.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.position.is_none()
    }
}
