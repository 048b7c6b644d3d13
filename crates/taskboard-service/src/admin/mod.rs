//! Administrative use cases.

mod service;

pub use service::AdminService;
