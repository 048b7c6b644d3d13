//! User entity and role enumeration.

pub mod model;
pub mod role;

pub use model::{CreateUser, User, UserSummary};
pub use role::UserRole;
