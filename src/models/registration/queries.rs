use rusqlite::{Connection, OptionalExtension, params};

use super::types::Registration;

const SELECT_REGISTRATION: &str =
    "SELECT id, user_id, expo_id, session_id, created_at FROM registrations";

fn row_to_registration(row: &rusqlite::Row) -> rusqlite::Result<Registration> {
    Ok(Registration {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        expo_id: row.get("expo_id")?,
        session_id: row.get("session_id")?,
        created_at: row.get("created_at")?,
    })
}

pub fn find_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<Registration>> {
    conn.query_row(
        &format!("{SELECT_REGISTRATION} WHERE id = ?1"),
        params![id],
        row_to_registration,
    )
    .optional()
}

/// Expo-level duplicate pre-check. Session registrations carry the expo id
/// too but have their own uniqueness key, so they are excluded here.
pub fn exists_for_expo(conn: &Connection, user_id: i64, expo_id: i64) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT COUNT(*) > 0 FROM registrations \
         WHERE user_id = ?1 AND expo_id = ?2 AND session_id IS NULL",
        params![user_id, expo_id],
        |row| row.get(0),
    )
}

pub fn exists_for_session(
    conn: &Connection,
    user_id: i64,
    session_id: i64,
) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT COUNT(*) > 0 FROM registrations WHERE user_id = ?1 AND session_id = ?2",
        params![user_id, session_id],
        |row| row.get(0),
    )
}

pub fn create_for_expo(conn: &Connection, user_id: i64, expo_id: i64) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO registrations (user_id, expo_id) VALUES (?1, ?2)",
        params![user_id, expo_id],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn create_for_session(
    conn: &Connection,
    user_id: i64,
    expo_id: i64,
    session_id: i64,
) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO registrations (user_id, expo_id, session_id) VALUES (?1, ?2, ?3)",
        params![user_id, expo_id, session_id],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_by_user(conn: &Connection, user_id: i64) -> rusqlite::Result<Vec<Registration>> {
    let sql = format!("{SELECT_REGISTRATION} WHERE user_id = ?1 ORDER BY id");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![user_id], row_to_registration)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn count_for_user_and_expo(
    conn: &Connection,
    user_id: i64,
    expo_id: i64,
) -> rusqlite::Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM registrations WHERE user_id = ?1 AND expo_id = ?2",
        params![user_id, expo_id],
        |row| row.get(0),
    )
}
