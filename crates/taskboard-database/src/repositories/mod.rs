//! Repository implementations, one per aggregate.

pub mod activity;
pub mod board;
pub mod card;
pub mod list;
pub mod session;
pub mod user;
pub mod workspace;
