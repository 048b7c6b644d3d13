//! # taskboard-entity
//!
//! Domain entity models for Taskboard: users, sessions, workspaces,
//! boards, lists, cards, and activity logs. Pure data definitions with
//! serde and sqlx derives; no business logic.

pub mod activity;
pub mod board;
pub mod card;
pub mod list;
pub mod session;
pub mod user;
pub mod workspace;
