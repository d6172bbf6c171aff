//! Booth model: bulk creation, listings, the atomic claim and the
//! concurrent double-booking guarantee.

use std::sync::{Arc, Barrier};

use expohall::models::booth::{self, NewBooth};
use expohall::models::exhibitor;

mod common;
use common::{insert_booth, insert_expo, insert_exhibitor, insert_user, setup_test_db};

#[test]
fn create_bulk_returns_available_booths() {
    let (_dir, pool) = setup_test_db();
    let mut conn = pool.get().expect("conn");
    let admin = insert_user(&conn, "Ada", "ada@example.com", "admin");
    let expo_id = insert_expo(&conn, admin, "TechExpo");

    let items = vec![
        NewBooth { expo_id, booth_number: "A1".to_string() },
        NewBooth { expo_id, booth_number: "A2".to_string() },
        NewBooth { expo_id, booth_number: "A3".to_string() },
    ];
    let created = booth::create_bulk(&mut conn, &items).expect("create");
    assert_eq!(created.len(), 3);
    assert!(created.iter().all(|b| b.is_available && b.exhibitor_id.is_none()));
    assert_eq!(booth::count_by_expo(&conn, expo_id).expect("count"), 3);
}

#[test]
fn claim_sets_both_sides_of_the_link() {
    let (_dir, pool) = setup_test_db();
    let mut conn = pool.get().expect("conn");
    let admin = insert_user(&conn, "Ada", "ada@example.com", "admin");
    let alice = insert_user(&conn, "Alice", "alice@example.com", "exhibitor");
    let expo_id = insert_expo(&conn, admin, "TechExpo");
    let booth_id = insert_booth(&conn, expo_id, "A1");
    let ex_id = insert_exhibitor(&conn, alice, expo_id, "Acme", true);

    assert!(booth::claim(&mut conn, booth_id, ex_id).expect("claim"));

    let b = booth::find_by_id(&conn, booth_id).expect("query").expect("found");
    assert!(!b.is_available);
    assert_eq!(b.exhibitor_id, Some(ex_id));

    let x = exhibitor::find_by_id(&conn, ex_id).expect("query").expect("found");
    assert_eq!(x.booth_id, Some(booth_id));
}

#[test]
fn claim_fails_on_taken_booth_and_leaves_state_alone() {
    let (_dir, pool) = setup_test_db();
    let mut conn = pool.get().expect("conn");
    let admin = insert_user(&conn, "Ada", "ada@example.com", "admin");
    let alice = insert_user(&conn, "Alice", "alice@example.com", "exhibitor");
    let bob = insert_user(&conn, "Bob", "bob@example.com", "exhibitor");
    let expo_id = insert_expo(&conn, admin, "TechExpo");
    let booth_id = insert_booth(&conn, expo_id, "A1");
    let first = insert_exhibitor(&conn, alice, expo_id, "Acme", true);
    let second = insert_exhibitor(&conn, bob, expo_id, "Globex", true);

    assert!(booth::claim(&mut conn, booth_id, first).expect("claim"));
    assert!(!booth::claim(&mut conn, booth_id, second).expect("claim"));

    let b = booth::find_by_id(&conn, booth_id).expect("query").expect("found");
    assert_eq!(b.exhibitor_id, Some(first));
    let x = exhibitor::find_by_id(&conn, second).expect("query").expect("found");
    assert!(x.booth_id.is_none(), "loser must not gain a booth reference");
}

/// Double-booking guard: N concurrent claims of one booth, exactly one wins.
#[test]
fn concurrent_claims_allow_exactly_one_winner() {
    const CONTENDERS: usize = 8;

    let (_dir, pool) = setup_test_db();
    let (booth_id, exhibitor_ids) = {
        let conn = pool.get().expect("conn");
        let admin = insert_user(&conn, "Ada", "ada@example.com", "admin");
        let expo_id = insert_expo(&conn, admin, "TechExpo");
        let booth_id = insert_booth(&conn, expo_id, "A1");
        let ids: Vec<i64> = (0..CONTENDERS)
            .map(|i| {
                let user = insert_user(
                    &conn,
                    &format!("Exhibitor {i}"),
                    &format!("ex{i}@example.com"),
                    "exhibitor",
                );
                insert_exhibitor(&conn, user, expo_id, &format!("Company {i}"), true)
            })
            .collect();
        (booth_id, ids)
    };

    let barrier = Arc::new(Barrier::new(CONTENDERS));
    let handles: Vec<_> = exhibitor_ids
        .iter()
        .map(|&ex_id| {
            let pool = pool.clone();
            let barrier = Arc::clone(&barrier);
            std::thread::spawn(move || {
                let mut conn = pool.get().expect("conn");
                barrier.wait();
                booth::claim(&mut conn, booth_id, ex_id).expect("claim")
            })
        })
        .collect();

    let outcomes: Vec<bool> = handles
        .into_iter()
        .map(|h| h.join().expect("claim thread panicked"))
        .collect();
    assert_eq!(
        outcomes.iter().filter(|&&won| won).count(),
        1,
        "exactly one concurrent claim may win"
    );

    // The booth and the winning exhibitor agree on the link
    let conn = pool.get().expect("conn");
    let b = booth::find_by_id(&conn, booth_id).expect("query").expect("found");
    assert!(!b.is_available);
    let winner = b.exhibitor_id.expect("winner recorded on booth");
    let x = exhibitor::find_by_id(&conn, winner).expect("query").expect("found");
    assert_eq!(x.booth_id, Some(booth_id));

    // Losers hold no booth reference
    for ex_id in exhibitor_ids.iter().filter(|&&id| id != winner) {
        let loser = exhibitor::find_by_id(&conn, *ex_id).expect("query").expect("found");
        assert!(loser.booth_id.is_none());
    }
}

#[test]
fn availability_listing_shows_occupant_email() {
    let (_dir, pool) = setup_test_db();
    let mut conn = pool.get().expect("conn");
    let admin = insert_user(&conn, "Ada", "ada@example.com", "admin");
    let alice = insert_user(&conn, "Alice", "alice@example.com", "exhibitor");
    let expo_id = insert_expo(&conn, admin, "TechExpo");
    let taken = insert_booth(&conn, expo_id, "A1");
    insert_booth(&conn, expo_id, "A2");
    let ex_id = insert_exhibitor(&conn, alice, expo_id, "Acme", true);
    booth::claim(&mut conn, taken, ex_id).expect("claim");

    let listing = booth::availability_by_expo(&conn, expo_id).expect("list");
    assert_eq!(listing.len(), 2);
    let a1 = listing.iter().find(|b| b.booth_number == "A1").expect("A1");
    assert!(!a1.is_available);
    assert_eq!(a1.exhibitor_email.as_deref(), Some("alice@example.com"));
    let a2 = listing.iter().find(|b| b.booth_number == "A2").expect("A2");
    assert!(a2.is_available);
    assert!(a2.exhibitor_email.is_none());
}

#[test]
fn occupancy_listing_reports_status_and_company() {
    let (_dir, pool) = setup_test_db();
    let mut conn = pool.get().expect("conn");
    let admin = insert_user(&conn, "Ada", "ada@example.com", "admin");
    let alice = insert_user(&conn, "Alice", "alice@example.com", "exhibitor");
    let expo_id = insert_expo(&conn, admin, "TechExpo");
    let taken = insert_booth(&conn, expo_id, "A1");
    insert_booth(&conn, expo_id, "A2");
    let ex_id = insert_exhibitor(&conn, alice, expo_id, "Acme", true);
    booth::claim(&mut conn, taken, ex_id).expect("claim");

    let listing = booth::occupancy_by_expo(&conn, expo_id).expect("list");
    let a1 = listing.iter().find(|b| b.booth_number == "A1").expect("A1");
    assert_eq!(a1.status, "Occupied");
    assert_eq!(a1.company_name.as_deref(), Some("Acme"));
    assert_eq!(a1.user_name.as_deref(), Some("Alice"));
    let a2 = listing.iter().find(|b| b.booth_number == "A2").expect("A2");
    assert_eq!(a2.status, "Available");
    assert!(a2.company_name.is_none());
}
