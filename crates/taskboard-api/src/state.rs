//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use taskboard_auth::jwt::{JwtDecoder, JwtEncoder};
use taskboard_auth::password::PasswordHasher;
use taskboard_auth::session::{SessionManager, SessionStore};
use taskboard_core::config::AppConfig;

use taskboard_database::repositories::activity::ActivityRepository;
use taskboard_database::repositories::board::BoardRepository;
use taskboard_database::repositories::card::CardRepository;
use taskboard_database::repositories::list::ListRepository;
use taskboard_database::repositories::session::SessionRepository;
use taskboard_database::repositories::user::UserRepository;
use taskboard_database::repositories::workspace::WorkspaceRepository;

use taskboard_service::{AdminService, BoardService, CardService, WorkspaceService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token encoder
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,
    /// Session persistence
    pub session_store: Arc<SessionStore>,
    /// Session lifecycle manager
    pub session_manager: Arc<SessionManager>,

    // ── Repositories ─────────────────────────────────────────
    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Session repository
    pub session_repo: Arc<SessionRepository>,
    /// Workspace repository
    pub workspace_repo: Arc<WorkspaceRepository>,
    /// Board repository
    pub board_repo: Arc<BoardRepository>,
    /// List repository
    pub list_repo: Arc<ListRepository>,
    /// Card repository
    pub card_repo: Arc<CardRepository>,
    /// Activity log repository
    pub activity_repo: Arc<ActivityRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Workspace service
    pub workspace_service: Arc<WorkspaceService>,
    /// Board service
    pub board_service: Arc<BoardService>,
    /// Card service
    pub card_service: Arc<CardService>,
    /// Admin service
    pub admin_service: Arc<AdminService>,
}
