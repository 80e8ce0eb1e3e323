//! User domain record.
//!
//! # Responsibility
//! - Define the canonical user shape (identity, names, email, role).
//! - Provide the record's own well-formedness check.
//!
//! # Invariants
//! - `id == UNASSIGNED_ID` marks a record that has not been stored yet;
//!   the repository assigns the real identifier on insert.
//! - `is_valid()` is a minimal gate: non-empty names/role and a loosely
//!   shaped email. The service layer applies a stricter email pattern on
//!   top of it before a record is ever constructed.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Repository-assigned identifier for a stored user.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type UserId = u32;

/// Sentinel meaning "no identifier assigned yet".
pub const UNASSIGNED_ID: UserId = 0;

// Loose shape check only: some local part, an `@`, some domain. The
// service's stricter pattern additionally requires a dotted TLD.
static SELF_CHECK_EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9+_.-]+@(.+)$").expect("valid self-check email regex"));

/// Canonical user record.
///
/// The role is free text at the model level; any picklist a front-end
/// offers is a convenience of that front-end, not a model constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique within a repository. `UNASSIGNED_ID` until inserted.
    pub id: UserId,
    /// Family name. Must be non-empty after trimming.
    pub last_name: String,
    /// Given name. Must be non-empty after trimming.
    pub first_name: String,
    /// Unique within a repository, compared case-insensitively.
    pub email: String,
    /// Free-text role label. Must be non-empty after trimming.
    pub role: String,
}

impl User {
    /// Creates a record with every field supplied by the caller.
    ///
    /// Does not validate; call `is_valid()` or go through the service.
    pub fn new(
        id: UserId,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id,
            last_name: last_name.into(),
            first_name: first_name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// Returns whether the repository has assigned an identifier yet.
    pub fn has_assigned_id(&self) -> bool {
        self.id != UNASSIGNED_ID
    }

    /// Minimal self-validation: non-empty trimmed names and role, and an
    /// email that at least looks like `local@domain`.
    pub fn is_valid(&self) -> bool {
        !self.last_name.trim().is_empty()
            && !self.first_name.trim().is_empty()
            && SELF_CHECK_EMAIL_RE.is_match(&self.email)
            && !self.role.trim().is_empty()
    }
}

impl Display for User {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "User{{id={}, last_name='{}', first_name='{}', email='{}', role='{}'}}",
            self.id, self.last_name, self.first_name, self.email, self.role
        )
    }
}
