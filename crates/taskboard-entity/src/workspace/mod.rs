//! Workspace entity and membership.

pub mod model;

pub use model::{CreateWorkspace, Workspace, WorkspaceMember};
