//! Repository layer: authoritative in-memory storage.
//!
//! # Responsibility
//! - Define the data-access contract used by the service layer.
//! - Own the record collection and the identifier counter.
//!
//! # Invariants
//! - Writes re-run `User::is_valid()` even though the service already
//!   validated; the repository never trusts its callers.
//! - Identifiers and emails (case-insensitively) stay unique across the
//!   stored collection on the insert path.

pub mod user_repo;
