//! # taskboard-service
//!
//! Business logic service layer for Taskboard. Each service orchestrates
//! repositories and authentication to implement application-level use
//! cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod activity;
pub mod admin;
pub mod board;
pub mod card;
pub mod context;
pub mod workspace;

pub use activity::ActivityRecorder;
pub use admin::AdminService;
pub use board::BoardService;
pub use card::CardService;
pub use context::RequestContext;
pub use workspace::WorkspaceService;
