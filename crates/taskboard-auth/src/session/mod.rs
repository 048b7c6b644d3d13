//! Session lifecycle: creation, validation, and revocation.

mod manager;
mod store;

pub use manager::{AuthenticatedRequest, LoginResult, SessionManager};
pub use store::SessionStore;
