//! Board and list use cases.

mod service;

pub use service::BoardService;
