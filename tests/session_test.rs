//! Session model: create, partial update, listing per expo.

use expohall::models::session::{self, NewSession, SessionPatch};

mod common;
use common::{insert_expo, insert_user, setup_test_db};

#[test]
fn create_and_list_by_expo() {
    let (_dir, pool) = setup_test_db();
    let conn = pool.get().expect("conn");
    let admin = insert_user(&conn, "Ada", "ada@example.com", "admin");
    let expo_id = insert_expo(&conn, admin, "TechExpo");
    let other = insert_expo(&conn, admin, "ArtExpo");

    session::create(
        &conn,
        &NewSession {
            expo_id,
            title: "Keynote".to_string(),
            start_time: "2025-01-01T10:00:00".to_string(),
            end_time: "2025-01-01T11:00:00".to_string(),
        },
    )
    .expect("create");
    session::create(
        &conn,
        &NewSession {
            expo_id,
            title: "Workshop".to_string(),
            start_time: "2025-01-01T13:00:00".to_string(),
            end_time: "2025-01-01T15:00:00".to_string(),
        },
    )
    .expect("create");

    let sessions = session::find_by_expo(&conn, expo_id).expect("list");
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].title, "Keynote");

    assert!(session::find_by_expo(&conn, other).expect("list").is_empty());
}

#[test]
fn update_overwrites_only_given_fields() {
    let (_dir, pool) = setup_test_db();
    let conn = pool.get().expect("conn");
    let admin = insert_user(&conn, "Ada", "ada@example.com", "admin");
    let expo_id = insert_expo(&conn, admin, "TechExpo");
    let id = session::create(
        &conn,
        &NewSession {
            expo_id,
            title: "Keynote".to_string(),
            start_time: "2025-01-01T10:00:00".to_string(),
            end_time: "2025-01-01T11:00:00".to_string(),
        },
    )
    .expect("create");

    let patch = SessionPatch {
        title: Some("Opening Keynote".to_string()),
        ..Default::default()
    };
    assert!(session::update(&conn, id, &patch).expect("update"));

    let found = session::find_by_id(&conn, id).expect("query").expect("found");
    assert_eq!(found.title, "Opening Keynote");
    assert_eq!(found.start_time, "2025-01-01T10:00:00");
}

#[test]
fn update_missing_returns_false() {
    let (_dir, pool) = setup_test_db();
    let conn = pool.get().expect("conn");
    assert!(!session::update(&conn, 999, &SessionPatch::default()).expect("update"));
}
