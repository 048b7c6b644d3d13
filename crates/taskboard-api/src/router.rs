//! Route definitions for the Taskboard HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The
//! router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(workspace_routes())
        .merge(board_routes())
        .merge(list_routes())
        .merge(card_routes())
        .merge(admin_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login, logout, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

/// Workspace listing, creation, and board listing
fn workspace_routes() -> Router<AppState> {
    Router::new()
        .route("/workspaces", get(handlers::workspace::list_workspaces))
        .route("/workspaces", post(handlers::workspace::create_workspace))
        .route(
            "/workspaces/{id}/boards",
            get(handlers::workspace::list_boards),
        )
}

/// Board creation, detail, and list creation
fn board_routes() -> Router<AppState> {
    Router::new()
        .route("/boards", post(handlers::board::create_board))
        .route("/boards/{id}", get(handlers::board::get_board))
        .route("/boards/{id}/lists", post(handlers::board::create_list))
}

/// List update and card creation
fn list_routes() -> Router<AppState> {
    Router::new()
        .route("/lists/{id}", put(handlers::list::update_list))
        .route("/lists/{id}/cards", post(handlers::list::create_card))
}

/// Card update and move
fn card_routes() -> Router<AppState> {
    Router::new()
        .route("/cards/{id}", put(handlers::card::update_card))
        .route("/cards/{id}/move", put(handlers::card::move_card))
}

/// Admin endpoints: user management and activity log
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/users", get(handlers::admin::list_users))
        .route(
            "/admin/users/{id}/role",
            put(handlers::admin::update_role),
        )
        .route(
            "/admin/users/{id}/deactivate",
            put(handlers::admin::deactivate_user),
        )
        .route("/admin/activity", get(handlers::admin::activity))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
