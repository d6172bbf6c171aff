use rusqlite::{Connection, OptionalExtension, TransactionBehavior, params};

use super::types::{Booth, BoothAvailability, BoothOccupancy, NewBooth};

const SELECT_BOOTH: &str =
    "SELECT id, expo_id, booth_number, is_available, exhibitor_id, created_at FROM booths";

fn row_to_booth(row: &rusqlite::Row) -> rusqlite::Result<Booth> {
    Ok(Booth {
        id: row.get("id")?,
        expo_id: row.get("expo_id")?,
        booth_number: row.get("booth_number")?,
        is_available: row.get("is_available")?,
        exhibitor_id: row.get("exhibitor_id")?,
        created_at: row.get("created_at")?,
    })
}

pub fn find_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<Booth>> {
    conn.query_row(
        &format!("{SELECT_BOOTH} WHERE id = ?1"),
        params![id],
        row_to_booth,
    )
    .optional()
}

/// Insert a batch of booths in one transaction and return the created rows.
pub fn create_bulk(conn: &mut Connection, items: &[NewBooth]) -> rusqlite::Result<Vec<Booth>> {
    let tx = conn.transaction()?;
    let mut ids = Vec::with_capacity(items.len());
    {
        let mut stmt =
            tx.prepare("INSERT INTO booths (expo_id, booth_number) VALUES (?1, ?2)")?;
        for item in items {
            stmt.execute(params![item.expo_id, item.booth_number])?;
            ids.push(tx.last_insert_rowid());
        }
    }
    let mut created = Vec::with_capacity(ids.len());
    {
        let sql = format!("{SELECT_BOOTH} WHERE id = ?1");
        let mut stmt = tx.prepare(&sql)?;
        for id in ids {
            created.push(stmt.query_row(params![id], row_to_booth)?);
        }
    }
    tx.commit()?;
    Ok(created)
}

/// All booths of an expo with the occupant's email where taken.
pub fn availability_by_expo(
    conn: &Connection,
    expo_id: i64,
) -> rusqlite::Result<Vec<BoothAvailability>> {
    let mut stmt = conn.prepare(
        "SELECT b.id, b.booth_number, b.is_available, u.email AS exhibitor_email \
         FROM booths b \
         LEFT JOIN exhibitors x ON x.id = b.exhibitor_id \
         LEFT JOIN users u ON u.id = x.user_id \
         WHERE b.expo_id = ?1 \
         ORDER BY b.booth_number, b.id",
    )?;
    let booths = stmt
        .query_map(params![expo_id], |row| {
            Ok(BoothAvailability {
                id: row.get("id")?,
                booth_number: row.get("booth_number")?,
                is_available: row.get("is_available")?,
                exhibitor_email: row.get("exhibitor_email")?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(booths)
}

/// Admin occupancy listing: Available/Occupied plus occupant company and user.
pub fn occupancy_by_expo(
    conn: &Connection,
    expo_id: i64,
) -> rusqlite::Result<Vec<BoothOccupancy>> {
    let mut stmt = conn.prepare(
        "SELECT b.id, b.booth_number, b.is_available, \
                x.company_name, u.name AS user_name, u.email AS user_email \
         FROM booths b \
         LEFT JOIN exhibitors x ON x.id = b.exhibitor_id \
         LEFT JOIN users u ON u.id = x.user_id \
         WHERE b.expo_id = ?1 \
         ORDER BY b.booth_number, b.id",
    )?;
    let booths = stmt
        .query_map(params![expo_id], |row| {
            let available: bool = row.get("is_available")?;
            Ok(BoothOccupancy {
                id: row.get("id")?,
                booth_number: row.get("booth_number")?,
                status: if available { "Available" } else { "Occupied" }.to_string(),
                company_name: row.get("company_name")?,
                user_name: row.get("user_name")?,
                user_email: row.get("user_email")?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(booths)
}

/// Atomically claim a booth for an exhibitor and link both sides.
///
/// The conditional UPDATE is the race guard: only the writer that flips
/// `is_available` from 1 to 0 proceeds, every concurrent claim of the same
/// booth sees zero affected rows and reports failure. Both writes commit in
/// one transaction so the booth/exhibitor link can never end up half set.
///
/// Returns false when the booth was already taken.
pub fn claim(conn: &mut Connection, booth_id: i64, exhibitor_id: i64) -> rusqlite::Result<bool> {
    // IMMEDIATE takes the write lock up front; competing claims queue on the
    // busy timeout instead of failing mid-transaction.
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let claimed = tx.execute(
        "UPDATE booths SET is_available = 0, exhibitor_id = ?1 \
         WHERE id = ?2 AND is_available = 1",
        params![exhibitor_id, booth_id],
    )?;
    if claimed == 0 {
        return Ok(false);
    }
    tx.execute(
        "UPDATE exhibitors SET booth_id = ?1 WHERE id = ?2",
        params![booth_id, exhibitor_id],
    )?;
    tx.commit()?;
    Ok(true)
}

pub fn count_by_expo(conn: &Connection, expo_id: i64) -> rusqlite::Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM booths WHERE expo_id = ?1",
        params![expo_id],
        |row| row.get(0),
    )
}
