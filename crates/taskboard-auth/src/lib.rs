//! # taskboard-auth
//!
//! Authentication building blocks for Taskboard.
//!
//! ## Modules
//!
//! - `jwt` — JWT token creation and validation
//! - `password` — Argon2id password hashing
//! - `session` — Session lifecycle (register, login, validate, revoke)

pub mod jwt;
pub mod password;
pub mod session;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
pub use session::{SessionManager, SessionStore};
