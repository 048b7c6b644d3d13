//! Response DTOs.
//!
//! Response shapes mirror the request they answer: single resources are
//! wrapped in a field named after the resource, collections in its
//! plural.

use serde::{Deserialize, Serialize};

use taskboard_core::types::pagination::PageResponse;
use taskboard_entity::activity::ActivityLogEntry;
use taskboard_entity::board::Board;
use taskboard_entity::board::view::BoardDetail;
use taskboard_entity::card::Card;
use taskboard_entity::list::List;
use taskboard_entity::user::User;
use taskboard_entity::workspace::Workspace;

/// Registration and login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The authenticated user.
    pub user: User,
    /// Bearer token for subsequent requests.
    pub token: String,
}

/// Current-user response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    /// The authenticated user.
    pub user: User,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Workspace collection response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspacesResponse {
    /// Workspaces the user belongs to.
    pub workspaces: Vec<Workspace>,
}

/// Single workspace response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceResponse {
    /// The workspace.
    pub workspace: Workspace,
}

/// Board collection response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardsResponse {
    /// Boards in the workspace.
    pub boards: Vec<Board>,
}

/// Single board response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardResponse {
    /// The board.
    pub board: Board,
}

/// Single list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    /// The list.
    pub list: List,
}

/// Single card response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardResponse {
    /// The card.
    pub card: Card,
}

/// Admin user listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersResponse {
    /// Paginated users.
    pub users: PageResponse<User>,
}

/// Admin activity log response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityResponse {
    /// Log entries, newest first.
    pub logs: Vec<ActivityLogEntry>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: `ok` or `degraded`.
    pub status: String,
    /// Whether the database answers.
    pub database: bool,
}

/// Board detail is returned as-is; re-exported for handler signatures.
pub type BoardDetailResponse = BoardDetail;
