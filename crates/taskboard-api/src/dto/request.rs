//! Request DTOs with validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Password; the minimum length is enforced again by the session
    /// manager from configuration.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Display name.
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create workspace request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateWorkspaceRequest {
    /// Workspace name.
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
}

/// Create board request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBoardRequest {
    /// Owning workspace.
    pub workspace_id: Uuid,
    /// Board name.
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Background color; the default is applied when absent.
    pub background_color: Option<String>,
}

/// Create list request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateListRequest {
    /// List name.
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    /// Explicit position; appended to the end when absent.
    pub position: Option<i32>,
}

/// Partial list update request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateListRequest {
    /// New name.
    pub name: Option<String>,
    /// New position.
    pub position: Option<i32>,
}

/// Create card request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCardRequest {
    /// Card title.
    #[validate(length(min = 1, max = 500, message = "Title is required"))]
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Explicit position; appended to the end when absent.
    pub position: Option<i32>,
}

/// Partial card update request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCardRequest {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New due date.
    pub due_date: Option<DateTime<Utc>>,
    /// New completion flag.
    pub is_completed: Option<bool>,
}

/// Card move request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveCardRequest {
    /// Destination list.
    pub list_id: Uuid,
    /// Desired position; clamped to the valid range.
    pub position: i32,
}

/// Role change request (admin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRoleRequest {
    /// New role: `admin`, `member`, or `observer`.
    pub role: String,
}

/// Activity log query parameters (admin).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityQuery {
    /// Restrict to one workspace.
    pub workspace_id: Option<Uuid>,
    /// Restrict to one board.
    pub board_id: Option<Uuid>,
    /// Restrict to one acting user.
    pub user_id: Option<Uuid>,
    /// Maximum number of entries.
    pub limit: Option<i64>,
}
