//! # taskboard-api
//!
//! HTTP API layer for Taskboard built on Axum.
//!
//! Provides all REST endpoints, middleware (auth, logging), extractors,
//! DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state};
pub use error::ApiError;
pub use state::AppState;
