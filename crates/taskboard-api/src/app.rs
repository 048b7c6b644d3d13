//! Application builder — wires repositories, auth, and services into
//! `AppState` and assembles the Axum app.

use std::sync::Arc;

use axum::Router;
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

use taskboard_service::{
    ActivityRecorder, AdminService, BoardService, CardService, WorkspaceService,
};

use crate::router::build_router;
use crate::state::AppState;

/// Constructs the full dependency graph from configuration and a pool.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    // ── Repositories ─────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let session_repo = Arc::new(SessionRepository::new(db_pool.clone()));
    let workspace_repo = Arc::new(WorkspaceRepository::new(db_pool.clone()));
    let board_repo = Arc::new(BoardRepository::new(db_pool.clone()));
    let list_repo = Arc::new(ListRepository::new(db_pool.clone()));
    let card_repo = Arc::new(CardRepository::new(db_pool.clone()));
    let activity_repo = Arc::new(ActivityRepository::new(db_pool.clone()));

    // ── Auth ─────────────────────────────────────────────────
    let password_hasher = Arc::new(PasswordHasher::new());
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth, &config.session));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let session_store = Arc::new(SessionStore::new(Arc::clone(&session_repo)));
    let session_manager = Arc::new(SessionManager::new(
        Arc::clone(&jwt_encoder),
        Arc::clone(&jwt_decoder),
        Arc::clone(&session_store),
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        config.auth.clone(),
    ));

    // ── Services ─────────────────────────────────────────────
    let activity_recorder = ActivityRecorder::new(Arc::clone(&activity_repo));
    let workspace_service = Arc::new(WorkspaceService::new(
        Arc::clone(&workspace_repo),
        activity_recorder.clone(),
    ));
    let board_service = Arc::new(BoardService::new(
        Arc::clone(&workspace_repo),
        Arc::clone(&board_repo),
        Arc::clone(&list_repo),
        Arc::clone(&card_repo),
        activity_recorder.clone(),
    ));
    let card_service = Arc::new(CardService::new(
        Arc::clone(&board_repo),
        Arc::clone(&list_repo),
        Arc::clone(&card_repo),
        activity_recorder.clone(),
    ));
    let admin_service = Arc::new(AdminService::new(
        Arc::clone(&user_repo),
        Arc::clone(&activity_repo),
        Arc::clone(&session_manager),
        activity_recorder,
    ));

    AppState {
        config: Arc::new(config),
        db_pool,
        jwt_encoder,
        jwt_decoder,
        password_hasher,
        session_store,
        session_manager,
        user_repo,
        session_repo,
        workspace_repo,
        board_repo,
        list_repo,
        card_repo,
        activity_repo,
        workspace_service,
        board_service,
        card_service,
        admin_service,
    }
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}
