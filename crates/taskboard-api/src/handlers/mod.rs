//! HTTP handlers, one module per route group.

pub mod admin;
pub mod auth;
pub mod board;
pub mod card;
pub mod health;
pub mod list;
pub mod workspace;
