//! List entity.

pub mod model;

pub use model::{CreateList, List, UpdateList};
