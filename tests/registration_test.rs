//! Registration model: the two independent uniqueness keys, expo-level and
//! session-level.

use expohall::models::registration;

mod common;
use common::{insert_expo, insert_session, insert_user, setup_test_db};

#[test]
fn expo_registration_duplicate_is_detected() {
    let (_dir, pool) = setup_test_db();
    let conn = pool.get().expect("conn");
    let admin = insert_user(&conn, "Ada", "ada@example.com", "admin");
    let bob = insert_user(&conn, "Bob", "bob@example.com", "attendee");
    let expo_id = insert_expo(&conn, admin, "TechExpo");

    assert!(!registration::exists_for_expo(&conn, bob, expo_id).expect("check"));
    registration::create_for_expo(&conn, bob, expo_id).expect("register");
    assert!(registration::exists_for_expo(&conn, bob, expo_id).expect("check"));
    assert_eq!(
        registration::count_for_user_and_expo(&conn, bob, expo_id).expect("count"),
        1
    );
}

#[test]
fn session_registration_duplicate_is_detected() {
    let (_dir, pool) = setup_test_db();
    let conn = pool.get().expect("conn");
    let admin = insert_user(&conn, "Ada", "ada@example.com", "admin");
    let bob = insert_user(&conn, "Bob", "bob@example.com", "attendee");
    let expo_id = insert_expo(&conn, admin, "TechExpo");
    let session_id = insert_session(&conn, expo_id, "Keynote");

    registration::create_for_session(&conn, bob, expo_id, session_id).expect("register");
    assert!(registration::exists_for_session(&conn, bob, session_id).expect("check"));

    let rows = registration::find_by_user(&conn, bob).expect("list");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].session_id, Some(session_id));
}

#[test]
fn expo_and_session_keys_are_independent() {
    let (_dir, pool) = setup_test_db();
    let conn = pool.get().expect("conn");
    let admin = insert_user(&conn, "Ada", "ada@example.com", "admin");
    let bob = insert_user(&conn, "Bob", "bob@example.com", "attendee");
    let expo_id = insert_expo(&conn, admin, "TechExpo");
    let session_id = insert_session(&conn, expo_id, "Keynote");

    // A session registration carries the expo id but does not block the
    // expo-level registration, and vice versa
    registration::create_for_session(&conn, bob, expo_id, session_id).expect("register session");
    assert!(!registration::exists_for_expo(&conn, bob, expo_id).expect("check"));

    registration::create_for_expo(&conn, bob, expo_id).expect("register expo");
    assert!(registration::exists_for_expo(&conn, bob, expo_id).expect("check"));
    assert!(registration::exists_for_session(&conn, bob, session_id).expect("check"));

    assert_eq!(
        registration::count_for_user_and_expo(&conn, bob, expo_id).expect("count"),
        2
    );
}

#[test]
fn registrations_are_listed_per_user() {
    let (_dir, pool) = setup_test_db();
    let conn = pool.get().expect("conn");
    let admin = insert_user(&conn, "Ada", "ada@example.com", "admin");
    let bob = insert_user(&conn, "Bob", "bob@example.com", "attendee");
    let carol = insert_user(&conn, "Carol", "carol@example.com", "attendee");
    let first = insert_expo(&conn, admin, "TechExpo");
    let second = insert_expo(&conn, admin, "ArtExpo");

    registration::create_for_expo(&conn, bob, first).expect("register");
    registration::create_for_expo(&conn, bob, second).expect("register");
    registration::create_for_expo(&conn, carol, first).expect("register");

    assert_eq!(registration::find_by_user(&conn, bob).expect("list").len(), 2);
    assert_eq!(registration::find_by_user(&conn, carol).expect("list").len(), 1);
}
