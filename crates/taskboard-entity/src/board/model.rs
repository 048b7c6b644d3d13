//! Board entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::user::UserRole;

/// Default board background color.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#0079BF";

/// A board of ordered lists belonging to exactly one workspace.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Board {
    /// Unique board identifier.
    pub id: Uuid,
    /// Owning workspace.
    pub workspace_id: Uuid,
    /// Board name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Display color.
    pub background_color: String,
    /// Whether non-members may view the board.
    pub is_public: bool,
    /// Whether the board is archived.
    pub is_archived: bool,
    /// Creating user.
    pub created_by: Uuid,
    /// When the board was created.
    pub created_at: DateTime<Utc>,
    /// When the board was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Membership row linking a user to a board with a role.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BoardMember {
    /// Board the membership belongs to.
    pub board_id: Uuid,
    /// Member user.
    pub user_id: Uuid,
    /// Role within the board.
    pub role: UserRole,
    /// When the membership was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBoard {
    /// Owning workspace.
    pub workspace_id: Uuid,
    /// Board name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Display color; defaults to [`DEFAULT_BACKGROUND_COLOR`].
    pub background_color: Option<String>,
    /// Creating user.
    pub created_by: Uuid,
}
