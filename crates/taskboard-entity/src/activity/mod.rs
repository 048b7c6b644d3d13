//! Activity log entity.

pub mod model;

pub use model::{ActivityFilter, ActivityLog, ActivityLogEntry, NewActivity};
