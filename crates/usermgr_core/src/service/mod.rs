//! Use-case services in front of the repository layer.
//!
//! # Responsibility
//! - Validate and normalize raw caller input before any storage call.
//! - Keep front-ends decoupled from repository internals.
//!
//! # Invariants
//! - Every external caller goes through the service, never the repository.
//! - Invalid input fails fast without touching the repository.

pub mod user_service;
