use usermgr_core::{InMemoryUserRepository, User, UserRepository, UNASSIGNED_ID};

fn unassigned(last: &str, first: &str, email: &str, role: &str) -> User {
    User::new(UNASSIGNED_ID, last, first, email, role)
}

#[test]
fn add_assigns_sequential_ids_starting_at_one() {
    let mut repo = InMemoryUserRepository::empty();

    assert!(repo.add(unassigned("Durand", "Alice", "alice@email.com", "Admin")));
    assert!(repo.add(unassigned("Petit", "Bruno", "bruno@email.com", "Utilisateur")));

    let all = repo.list_all();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, 1);
    assert_eq!(all[1].id, 2);
}

#[test]
fn add_keeps_a_preassigned_id() {
    let mut repo = InMemoryUserRepository::empty();

    assert!(repo.add(User::new(42, "Durand", "Alice", "alice@email.com", "Admin")));
    assert_eq!(repo.find_by_id(42).unwrap().last_name, "Durand");
}

#[test]
fn add_rejects_invalid_record_without_mutation() {
    let mut repo = InMemoryUserRepository::empty();

    assert!(!repo.add(unassigned("", "Alice", "alice@email.com", "Admin")));
    assert!(!repo.add(unassigned("Durand", "Alice", "no-at-sign", "Admin")));
    assert!(repo.list_all().is_empty());
}

#[test]
fn add_rejects_duplicate_email_case_insensitively() {
    let mut repo = InMemoryUserRepository::empty();
    assert!(repo.add(unassigned("Durand", "Alice", "alice@email.com", "Admin")));

    assert!(!repo.add(unassigned("Petit", "Bruno", "ALICE@EMAIL.COM", "Utilisateur")));
    assert_eq!(repo.list_all().len(), 1);
}

#[test]
fn remove_reports_whether_a_record_existed() {
    let mut repo = InMemoryUserRepository::empty();
    repo.add(unassigned("Durand", "Alice", "alice@email.com", "Admin"));

    assert!(repo.remove(1));
    assert!(repo.find_by_id(1).is_none());
    assert!(!repo.remove(1));
    assert!(!repo.remove(999));
}

#[test]
fn update_replaces_wholesale_and_preserves_position() {
    let mut repo = InMemoryUserRepository::empty();
    repo.add(unassigned("Durand", "Alice", "alice@email.com", "Admin"));
    repo.add(unassigned("Petit", "Bruno", "bruno@email.com", "Utilisateur"));
    repo.add(unassigned("Moreau", "Chloe", "chloe@email.com", "Utilisateur"));

    assert!(repo.update(User::new(2, "Renard", "Bruno", "renard@email.com", "Admin")));

    let all = repo.list_all();
    assert_eq!(all[1].id, 2);
    assert_eq!(all[1].last_name, "Renard");
    assert_eq!(all[1].email, "renard@email.com");
    assert_eq!(all[0].last_name, "Durand");
    assert_eq!(all[2].last_name, "Moreau");
}

#[test]
fn update_fails_for_unknown_id_or_invalid_record() {
    let mut repo = InMemoryUserRepository::empty();
    repo.add(unassigned("Durand", "Alice", "alice@email.com", "Admin"));

    assert!(!repo.update(User::new(99, "Durand", "Alice", "alice@email.com", "Admin")));
    assert!(!repo.update(User::new(1, "", "Alice", "alice@email.com", "Admin")));
    assert_eq!(repo.find_by_id(1).unwrap().last_name, "Durand");
}

#[test]
fn update_does_not_recheck_email_uniqueness() {
    // Pins the deliberately permissive update contract: an update may
    // introduce an email already held by a different record.
    let mut repo = InMemoryUserRepository::empty();
    repo.add(unassigned("Durand", "Alice", "alice@email.com", "Admin"));
    repo.add(unassigned("Petit", "Bruno", "bruno@email.com", "Utilisateur"));

    assert!(repo.update(User::new(2, "Petit", "Bruno", "alice@email.com", "Utilisateur")));
    assert_eq!(repo.search_by_email("alice@email.com").len(), 2);
}

#[test]
fn list_all_returns_a_defensive_copy() {
    let mut repo = InMemoryUserRepository::empty();
    repo.add(unassigned("Durand", "Alice", "alice@email.com", "Admin"));

    let mut copy = repo.list_all();
    copy.clear();
    copy.push(User::new(77, "Intrus", "Max", "max@email.com", "Admin"));

    assert_eq!(repo.list_all().len(), 1);
    assert!(repo.find_by_id(77).is_none());
}

#[test]
fn search_by_name_is_case_insensitive_substring_on_last_name() {
    let mut repo = InMemoryUserRepository::empty();
    repo.add(unassigned("Dupont", "Jean", "jean@email.com", "Utilisateur"));
    repo.add(unassigned("Dupontel", "Albert", "albert@email.com", "Admin"));
    repo.add(unassigned("Martin", "Dupont", "martin@email.com", "Utilisateur"));

    let hits = repo.search_by_name("DUPONT");
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].last_name, "Dupont");
    assert_eq!(hits[1].last_name, "Dupontel");

    assert!(repo.search_by_name("zzz").is_empty());
}

#[test]
fn search_by_email_is_case_insensitive_exact_match() {
    let mut repo = InMemoryUserRepository::empty();
    repo.add(unassigned("Dupont", "Jean", "jean.dupont@email.com", "Utilisateur"));

    assert_eq!(repo.search_by_email("JEAN.DUPONT@EMAIL.COM").len(), 1);
    assert!(repo.search_by_email("jean.dupont@email").is_empty());
}

#[test]
fn seeded_repository_starts_with_three_demo_users() {
    let mut repo = InMemoryUserRepository::new();

    let all = repo.list_all();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].id, 1);
    assert_eq!(all[0].last_name, "Dupont");
    assert_eq!(all[1].id, 2);
    assert_eq!(all[1].email, "marie.martin@email.com");
    assert_eq!(all[2].id, 3);
    assert_eq!(all[2].role, "Utilisateur");

    // The counter continues after the seeds.
    assert!(repo.add(unassigned("Durand", "Alice", "alice@email.com", "Admin")));
    assert_eq!(repo.find_by_id(4).unwrap().last_name, "Durand");
}

#[test]
fn independent_repositories_do_not_share_counters() {
    let mut a = InMemoryUserRepository::empty();
    let mut b = InMemoryUserRepository::empty();

    a.add(unassigned("Durand", "Alice", "alice@email.com", "Admin"));
    a.add(unassigned("Petit", "Bruno", "bruno@email.com", "Admin"));
    b.add(unassigned("Moreau", "Chloe", "chloe@email.com", "Admin"));

    assert_eq!(b.list_all()[0].id, 1);
}
