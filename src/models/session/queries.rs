use rusqlite::{Connection, OptionalExtension, params};

use super::types::{NewSession, Session, SessionPatch};

const SELECT_SESSION: &str =
    "SELECT id, expo_id, title, start_time, end_time, created_at FROM sessions";

fn row_to_session(row: &rusqlite::Row) -> rusqlite::Result<Session> {
    Ok(Session {
        id: row.get("id")?,
        expo_id: row.get("expo_id")?,
        title: row.get("title")?,
        start_time: row.get("start_time")?,
        end_time: row.get("end_time")?,
        created_at: row.get("created_at")?,
    })
}

pub fn create(conn: &Connection, new: &NewSession) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO sessions (expo_id, title, start_time, end_time) VALUES (?1, ?2, ?3, ?4)",
        params![new.expo_id, new.title, new.start_time, new.end_time],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<Session>> {
    conn.query_row(
        &format!("{SELECT_SESSION} WHERE id = ?1"),
        params![id],
        row_to_session,
    )
    .optional()
}

pub fn find_by_expo(conn: &Connection, expo_id: i64) -> rusqlite::Result<Vec<Session>> {
    let sql = format!("{SELECT_SESSION} WHERE expo_id = ?1 ORDER BY start_time, id");
    let mut stmt = conn.prepare(&sql)?;
    let sessions = stmt
        .query_map(params![expo_id], row_to_session)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(sessions)
}

/// Partial overwrite. Returns false when the session does not exist.
pub fn update(conn: &Connection, id: i64, patch: &SessionPatch) -> rusqlite::Result<bool> {
    let changed = conn.execute(
        "UPDATE sessions SET \
             title = COALESCE(?1, title), \
             start_time = COALESCE(?2, start_time), \
             end_time = COALESCE(?3, end_time) \
         WHERE id = ?4",
        params![patch.title, patch.start_time, patch.end_time, id],
    )?;
    Ok(changed > 0)
}

pub fn count_by_expo(conn: &Connection, expo_id: i64) -> rusqlite::Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM sessions WHERE expo_id = ?1",
        params![expo_id],
        |row| row.get(0),
    )
}
