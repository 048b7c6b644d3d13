//! Activity log entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A recorded mutation, written by the service layer and queried by admins.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ActivityLog {
    /// Unique log entry identifier.
    pub id: Uuid,
    /// Workspace context, when applicable.
    pub workspace_id: Option<Uuid>,
    /// Board context, when applicable.
    pub board_id: Option<Uuid>,
    /// Card context, when applicable.
    pub card_id: Option<Uuid>,
    /// Acting user.
    pub user_id: Uuid,
    /// Machine-readable action name (e.g. `"card.moved"`).
    pub action: String,
    /// Structured action details.
    pub details: Option<serde_json::Value>,
    /// When the action happened.
    pub created_at: DateTime<Utc>,
}

/// A log entry joined with the acting user's name and email.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ActivityLogEntry {
    /// Unique log entry identifier.
    pub id: Uuid,
    /// Workspace context, when applicable.
    pub workspace_id: Option<Uuid>,
    /// Board context, when applicable.
    pub board_id: Option<Uuid>,
    /// Card context, when applicable.
    pub card_id: Option<Uuid>,
    /// Acting user.
    pub user_id: Uuid,
    /// Acting user's display name.
    pub user_name: String,
    /// Acting user's email.
    pub user_email: String,
    /// Machine-readable action name.
    pub action: String,
    /// Structured action details.
    pub details: Option<serde_json::Value>,
    /// When the action happened.
    pub created_at: DateTime<Utc>,
}

/// Data for recording a new activity entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewActivity {
    /// Workspace context, when applicable.
    pub workspace_id: Option<Uuid>,
    /// Board context, when applicable.
    pub board_id: Option<Uuid>,
    /// Card context, when applicable.
    pub card_id: Option<Uuid>,
    /// Machine-readable action name.
    pub action: String,
    /// Structured action details.
    pub details: Option<serde_json::Value>,
}

/// Optional filters for admin activity queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityFilter {
    /// Restrict to one workspace.
    pub workspace_id: Option<Uuid>,
    /// Restrict to one board.
    pub board_id: Option<Uuid>,
    /// Restrict to one acting user.
    pub user_id: Option<Uuid>,
    /// Maximum number of entries to return.
    pub limit: Option<i64>,
}
