//! Shared test infrastructure.
//!
//! `setup_test_db()` gives every test an isolated SQLite file in a temp
//! directory with the full schema applied. The TempDir must be kept alive
//! for the pool to stay valid.

#![allow(dead_code)]

use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::params;
use tempfile::TempDir;

use expohall::db::{DbPool, MIGRATIONS};

pub const TEST_PASSWORD: &str = "Password1!";

/// Placeholder hash for users created directly in SQL. Not verifiable;
/// tests that exercise login go through the register endpoint instead.
pub const DUMMY_HASH: &str = "$argon2-not-a-real-hash$";

pub fn setup_test_db() -> (TempDir, DbPool) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.db");

    let manager = SqliteConnectionManager::file(&db_path).with_init(|conn| {
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA busy_timeout=5000;")?;
        Ok(())
    });
    let pool = r2d2::Pool::builder()
        .max_size(8)
        .build(manager)
        .expect("Failed to create test pool");

    pool.get()
        .expect("Failed to get test connection")
        .execute_batch(MIGRATIONS)
        .expect("Failed to run migrations");

    (dir, pool)
}

pub fn insert_user(conn: &rusqlite::Connection, name: &str, email: &str, role: &str) -> i64 {
    conn.execute(
        "INSERT INTO users (name, email, password, role) VALUES (?1, ?2, ?3, ?4)",
        params![name, email, DUMMY_HASH, role],
    )
    .expect("insert user");
    conn.last_insert_rowid()
}

pub fn insert_expo(conn: &rusqlite::Connection, created_by: i64, title: &str) -> i64 {
    conn.execute(
        "INSERT INTO expos (title, description, location, start_date, end_date, created_by) \
         VALUES (?1, '', '', '2025-01-01', '2025-01-03', ?2)",
        params![title, created_by],
    )
    .expect("insert expo");
    conn.last_insert_rowid()
}

pub fn insert_booth(conn: &rusqlite::Connection, expo_id: i64, number: &str) -> i64 {
    conn.execute(
        "INSERT INTO booths (expo_id, booth_number) VALUES (?1, ?2)",
        params![expo_id, number],
    )
    .expect("insert booth");
    conn.last_insert_rowid()
}

pub fn insert_session(conn: &rusqlite::Connection, expo_id: i64, title: &str) -> i64 {
    conn.execute(
        "INSERT INTO sessions (expo_id, title, start_time, end_time) \
         VALUES (?1, ?2, '2025-01-01T10:00:00', '2025-01-01T11:00:00')",
        params![expo_id, title],
    )
    .expect("insert session");
    conn.last_insert_rowid()
}

/// Create an exhibitor row directly, optionally already approved.
pub fn insert_exhibitor(
    conn: &rusqlite::Connection,
    user_id: i64,
    expo_id: i64,
    company: &str,
    approved: bool,
) -> i64 {
    let status = if approved { "approved" } else { "pending" };
    conn.execute(
        "INSERT INTO exhibitors (user_id, expo_id, company_name, status) \
         VALUES (?1, ?2, ?3, ?4)",
        params![user_id, expo_id, company, status],
    )
    .expect("insert exhibitor");
    conn.last_insert_rowid()
}
