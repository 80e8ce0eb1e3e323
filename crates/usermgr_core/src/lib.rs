//! Core domain logic for the usermgr user directory.
//! This crate is the single source of truth for validation and storage
//! invariants; front-ends stay thin views over the service API.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::user::{User, UserId, UNASSIGNED_ID};
pub use repo::user_repo::{InMemoryUserRepository, UserRepository};
pub use service::user_service::UserService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
