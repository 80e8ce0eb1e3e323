//! Domain model for the user directory.
//!
//! # Responsibility
//! - Define the canonical user record shared by repository and service.
//! - Keep the record's minimal self-validation close to the data.
//!
//! # Invariants
//! - Every stored record is identified by a repository-assigned `UserId`.
//! - A record failing `User::is_valid()` never reaches a repository.

pub mod user;
