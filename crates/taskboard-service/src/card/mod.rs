//! Card use cases.

mod service;

pub use service::CardService;
