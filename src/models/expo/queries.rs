use rusqlite::{Connection, OptionalExtension, TransactionBehavior, params};

use super::types::{Expo, ExpoPatch, NewExpo};

/// Expo with creator info. The creator row may be gone, hence COALESCE.
const SELECT_EXPO: &str = "\
    SELECT e.id, e.title, e.description, e.location, e.start_date, e.end_date, \
           e.created_by, \
           COALESCE(u.name, '') AS creator_name, \
           COALESCE(u.email, '') AS creator_email, \
           e.created_at \
    FROM expos e \
    LEFT JOIN users u ON u.id = e.created_by";

fn row_to_expo(row: &rusqlite::Row) -> rusqlite::Result<Expo> {
    Ok(Expo {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        location: row.get("location")?,
        start_date: row.get("start_date")?,
        end_date: row.get("end_date")?,
        created_by: row.get("created_by")?,
        creator_name: row.get("creator_name")?,
        creator_email: row.get("creator_email")?,
        created_at: row.get("created_at")?,
    })
}

pub fn create(conn: &Connection, new: &NewExpo) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO expos (title, description, location, start_date, end_date, created_by) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            new.title,
            new.description,
            new.location,
            new.start_date,
            new.end_date,
            new.created_by
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<Expo>> {
    conn.query_row(
        &format!("{SELECT_EXPO} WHERE e.id = ?1"),
        params![id],
        row_to_expo,
    )
    .optional()
}

pub fn find_all(conn: &Connection) -> rusqlite::Result<Vec<Expo>> {
    let sql = format!("{SELECT_EXPO} ORDER BY e.start_date, e.id");
    let mut stmt = conn.prepare(&sql)?;
    let expos = stmt
        .query_map([], row_to_expo)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(expos)
}

/// Overwrite only the fields present in the patch. Returns false when the
/// expo does not exist.
pub fn update(conn: &Connection, id: i64, patch: &ExpoPatch) -> rusqlite::Result<bool> {
    let changed = conn.execute(
        "UPDATE expos SET \
             title = COALESCE(?1, title), \
             description = COALESCE(?2, description), \
             location = COALESCE(?3, location), \
             start_date = COALESCE(?4, start_date), \
             end_date = COALESCE(?5, end_date) \
         WHERE id = ?6",
        params![
            patch.title,
            patch.description,
            patch.location,
            patch.start_date,
            patch.end_date,
            id
        ],
    )?;
    Ok(changed > 0)
}

/// Delete an expo together with its booths and sessions. Exhibitor and
/// registration rows that reference the expo are intentionally left behind.
/// Returns false when the expo does not exist.
pub fn delete_with_children(conn: &mut Connection, id: i64) -> rusqlite::Result<bool> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let deleted = tx.execute("DELETE FROM expos WHERE id = ?1", params![id])?;
    if deleted == 0 {
        return Ok(false);
    }
    tx.execute("DELETE FROM booths WHERE expo_id = ?1", params![id])?;
    tx.execute("DELETE FROM sessions WHERE expo_id = ?1", params![id])?;
    tx.commit()?;
    Ok(true)
}
