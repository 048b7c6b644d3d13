//! # taskboard-database
//!
//! PostgreSQL connection management, the migration runner, and repository
//! implementations for every Taskboard entity.

pub mod connection;
pub mod migration;
pub mod repositories;
