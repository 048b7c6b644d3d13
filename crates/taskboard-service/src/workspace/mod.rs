//! Workspace use cases.

mod service;

pub use service::WorkspaceService;
