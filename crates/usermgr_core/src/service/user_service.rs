//! User use-case service.
//!
//! # Responsibility
//! - Trim and validate the four text fields of every mutation request.
//! - Apply the strict email pattern before a record is constructed.
//! - Delegate storage to an injected repository implementation.
//!
//! # Invariants
//! - Failure is always communicated as `false` (mutations) or an empty
//!   sequence (searches); nothing error-like crosses this boundary.
//! - The strict email check requires a dot-separated domain with a
//!   two-letter-or-longer final segment, tighter than the model's own
//!   self-check. Records must pass both gates to be stored.

use crate::model::user::{User, UserId, UNASSIGNED_ID};
use crate::repo::user_repo::UserRepository;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static STRICT_EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("valid strict email regex")
});

/// Validation and normalization gateway over a user repository.
///
/// The repository is injected rather than constructed internally, so tests
/// and front-ends control seeding and lifetime.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a service over the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates, trims and stores a new user. The identifier is assigned
    /// by the repository.
    pub fn add_user(&mut self, last_name: &str, first_name: &str, email: &str, role: &str) -> bool {
        let Some(fields) = normalized_fields(last_name, first_name, email, role) else {
            debug!("event=add_user_rejected module=service reason=invalid_input");
            return false;
        };
        self.repo.add(fields.into_user(UNASSIGNED_ID))
    }

    /// Removes the user with the given identifier.
    pub fn delete_user(&mut self, id: UserId) -> bool {
        self.repo.remove(id)
    }

    /// Validates, trims and replaces the user with the given identifier
    /// wholesale.
    pub fn update_user(
        &mut self,
        id: UserId,
        last_name: &str,
        first_name: &str,
        email: &str,
        role: &str,
    ) -> bool {
        let Some(fields) = normalized_fields(last_name, first_name, email, role) else {
            debug!("event=update_user_rejected module=service reason=invalid_input id={id}");
            return false;
        };
        self.repo.update(fields.into_user(id))
    }

    /// All stored users in insertion order.
    pub fn list_all_users(&self) -> Vec<User> {
        self.repo.list_all()
    }

    /// The user with the given identifier, if any.
    pub fn find_user_by_id(&self, id: UserId) -> Option<User> {
        self.repo.find_by_id(id)
    }

    /// Users whose last name contains the trimmed term, case-insensitively.
    /// Blank input short-circuits to an empty result without a storage call.
    pub fn search_users_by_name(&self, name: &str) -> Vec<User> {
        let term = name.trim();
        if term.is_empty() {
            return Vec::new();
        }
        self.repo.search_by_name(term)
    }
}

/// Trimmed field set that passed service-level validation.
struct NormalizedFields {
    last_name: String,
    first_name: String,
    email: String,
    role: String,
}

impl NormalizedFields {
    fn into_user(self, id: UserId) -> User {
        User::new(id, self.last_name, self.first_name, self.email, self.role)
    }
}

/// Shared validation for `add_user` and `update_user`: all four fields
/// non-empty after trimming and the email matching the strict pattern.
fn normalized_fields(
    last_name: &str,
    first_name: &str,
    email: &str,
    role: &str,
) -> Option<NormalizedFields> {
    let last_name = last_name.trim();
    let first_name = first_name.trim();
    let email = email.trim();
    let role = role.trim();

    if last_name.is_empty() || first_name.is_empty() || role.is_empty() || !is_valid_email(email) {
        return None;
    }

    Some(NormalizedFields {
        last_name: last_name.to_string(),
        first_name: first_name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
    })
}

fn is_valid_email(email: &str) -> bool {
    STRICT_EMAIL_RE.is_match(email)
}
