//! User repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide add/remove/update/find/list/search over the stored users.
//! - Assign identifiers from an instance-owned counter on insert.
//!
//! # Invariants
//! - `add` enforces case-insensitive email uniqueness; `update` does not
//!   re-check it against other records (accepted gap, see DESIGN.md).
//! - Sequences handed to callers are defensive copies; caller mutation
//!   never reaches internal state.
//! - Insertion order is the only ordering; all queries are linear scans
//!   over a deliberately small list.

use crate::model::user::{User, UserId, UNASSIGNED_ID};
use log::debug;

/// Data-access contract for user storage.
///
/// Mutating operations report failure as `false` with no mutation; there is
/// no error taxonomy at this boundary.
pub trait UserRepository {
    /// Stores a record. Assigns the next identifier when the record carries
    /// the unassigned sentinel. Fails on self-validation failure or a
    /// case-insensitive duplicate email.
    fn add(&mut self, user: User) -> bool;

    /// Removes the record with the given identifier. True iff one existed.
    fn remove(&mut self, id: UserId) -> bool;

    /// Replaces the record with the same identifier wholesale, preserving
    /// its position. Fails on self-validation failure or unknown identifier.
    /// Email uniqueness is not re-checked here.
    fn update(&mut self, user: User) -> bool;

    /// First record matching the identifier, if any.
    fn find_by_id(&self, id: UserId) -> Option<User>;

    /// All records, insertion order, as an independent copy.
    fn list_all(&self) -> Vec<User>;

    /// Records whose last name contains `term`, case-insensitively.
    fn search_by_name(&self, term: &str) -> Vec<User>;

    /// Records whose email equals `email`, case-insensitively.
    fn search_by_email(&self, email: &str) -> Vec<User>;
}

/// In-memory user store backed by a plain `Vec`.
///
/// The identifier counter is an instance field so independent repositories
/// (production, tests) never share state.
pub struct InMemoryUserRepository {
    users: Vec<User>,
    next_id: UserId,
}

impl InMemoryUserRepository {
    /// Creates a repository pre-seeded with the three demonstration
    /// records (ids 1 to 3).
    pub fn new() -> Self {
        let mut repo = Self::empty();
        repo.seed_demo_users();
        repo
    }

    /// Creates an unseeded repository. Intended for callers that want full
    /// control over contents, tests in particular.
    pub fn empty() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }

    fn seed_demo_users(&mut self) {
        let demo = [
            ("Dupont", "Jean", "jean.dupont@email.com", "Utilisateur"),
            ("Martin", "Marie", "marie.martin@email.com", "Admin"),
            ("Bernard", "Pierre", "pierre.bernard@email.com", "Utilisateur"),
        ];
        for (last_name, first_name, email, role) in demo {
            let stored = self.add(User::new(UNASSIGNED_ID, last_name, first_name, email, role));
            debug_assert!(stored, "demo seed records must be valid and unique");
        }
        debug!(
            "event=repo_seeded module=repo status=ok count={}",
            self.users.len()
        );
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn add(&mut self, mut user: User) -> bool {
        if !user.is_valid() {
            debug!("event=add_rejected module=repo reason=invalid_record");
            return false;
        }
        if self
            .users
            .iter()
            .any(|existing| emails_equal(&existing.email, &user.email))
        {
            debug!(
                "event=add_rejected module=repo reason=duplicate_email id={}",
                user.id
            );
            return false;
        }

        if !user.has_assigned_id() {
            user.id = self.next_id;
            self.next_id += 1;
        }
        debug!("event=user_added module=repo status=ok id={}", user.id);
        self.users.push(user);
        true
    }

    fn remove(&mut self, id: UserId) -> bool {
        let before = self.users.len();
        self.users.retain(|user| user.id != id);
        let removed = self.users.len() < before;
        if removed {
            debug!("event=user_removed module=repo status=ok id={id}");
        }
        removed
    }

    fn update(&mut self, user: User) -> bool {
        if !user.is_valid() {
            debug!("event=update_rejected module=repo reason=invalid_record");
            return false;
        }
        match self.users.iter_mut().find(|existing| existing.id == user.id) {
            Some(slot) => {
                debug!("event=user_updated module=repo status=ok id={}", user.id);
                *slot = user;
                true
            }
            None => {
                debug!(
                    "event=update_rejected module=repo reason=not_found id={}",
                    user.id
                );
                false
            }
        }
    }

    fn find_by_id(&self, id: UserId) -> Option<User> {
        self.users.iter().find(|user| user.id == id).cloned()
    }

    fn list_all(&self) -> Vec<User> {
        self.users.clone()
    }

    fn search_by_name(&self, term: &str) -> Vec<User> {
        let needle = term.to_lowercase();
        self.users
            .iter()
            .filter(|user| user.last_name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    fn search_by_email(&self, email: &str) -> Vec<User> {
        self.users
            .iter()
            .filter(|user| emails_equal(&user.email, email))
            .cloned()
            .collect()
    }
}

fn emails_equal(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
