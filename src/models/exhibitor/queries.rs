use rusqlite::{Connection, OptionalExtension, TransactionBehavior, params};

use super::types::{ApplicationSummary, Exhibitor, ExhibitorStatus, ExhibitorWithUser};
use crate::models::booth::Booth;

const SELECT_EXHIBITOR: &str = "\
    SELECT id, user_id, expo_id, company_name, status, booth_id, created_at \
    FROM exhibitors";

const SELECT_EXHIBITOR_WITH_USER: &str = "\
    SELECT x.id, x.user_id, x.expo_id, x.company_name, x.status, x.booth_id, \
           COALESCE(u.name, '') AS user_name, \
           COALESCE(u.email, '') AS user_email, \
           x.created_at \
    FROM exhibitors x \
    LEFT JOIN users u ON u.id = x.user_id";

fn row_to_exhibitor(row: &rusqlite::Row) -> rusqlite::Result<Exhibitor> {
    Ok(Exhibitor {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        expo_id: row.get("expo_id")?,
        company_name: row.get("company_name")?,
        status: row.get("status")?,
        booth_id: row.get("booth_id")?,
        created_at: row.get("created_at")?,
    })
}

fn row_to_exhibitor_with_user(row: &rusqlite::Row) -> rusqlite::Result<ExhibitorWithUser> {
    Ok(ExhibitorWithUser {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        expo_id: row.get("expo_id")?,
        company_name: row.get("company_name")?,
        status: row.get("status")?,
        booth_id: row.get("booth_id")?,
        user_name: row.get("user_name")?,
        user_email: row.get("user_email")?,
        created_at: row.get("created_at")?,
    })
}

/// Create a pending application. The expo id is recorded as given; whether
/// it refers to a live expo is not checked here.
pub fn create(
    conn: &Connection,
    user_id: i64,
    expo_id: i64,
    company_name: &str,
) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO exhibitors (user_id, expo_id, company_name, status) \
         VALUES (?1, ?2, ?3, ?4)",
        params![user_id, expo_id, company_name, ExhibitorStatus::Pending],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<Exhibitor>> {
    conn.query_row(
        &format!("{SELECT_EXHIBITOR} WHERE id = ?1"),
        params![id],
        row_to_exhibitor,
    )
    .optional()
}

/// Duplicate-application pre-check: any record for this (user, expo) pair.
pub fn find_by_user_and_expo(
    conn: &Connection,
    user_id: i64,
    expo_id: i64,
) -> rusqlite::Result<Option<Exhibitor>> {
    conn.query_row(
        &format!("{SELECT_EXHIBITOR} WHERE user_id = ?1 AND expo_id = ?2"),
        params![user_id, expo_id],
        row_to_exhibitor,
    )
    .optional()
}

/// The approved application a booth claim must be backed by.
pub fn find_approved(
    conn: &Connection,
    user_id: i64,
    expo_id: i64,
) -> rusqlite::Result<Option<Exhibitor>> {
    conn.query_row(
        &format!("{SELECT_EXHIBITOR} WHERE user_id = ?1 AND expo_id = ?2 AND status = ?3"),
        params![user_id, expo_id, ExhibitorStatus::Approved],
        row_to_exhibitor,
    )
    .optional()
}

pub fn find_pending(conn: &Connection) -> rusqlite::Result<Vec<ExhibitorWithUser>> {
    let sql = format!("{SELECT_EXHIBITOR_WITH_USER} WHERE x.status = ?1 ORDER BY x.id");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![ExhibitorStatus::Pending], row_to_exhibitor_with_user)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn find_by_expo(conn: &Connection, expo_id: i64) -> rusqlite::Result<Vec<ExhibitorWithUser>> {
    let sql = format!("{SELECT_EXHIBITOR_WITH_USER} WHERE x.expo_id = ?1 ORDER BY x.id");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![expo_id], row_to_exhibitor_with_user)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn find_by_id_with_user(
    conn: &Connection,
    id: i64,
) -> rusqlite::Result<Option<ExhibitorWithUser>> {
    conn.query_row(
        &format!("{SELECT_EXHIBITOR_WITH_USER} WHERE x.id = ?1"),
        params![id],
        row_to_exhibitor_with_user,
    )
    .optional()
}

/// All applications of one user, with expo title and booth number resolved
/// where those rows still exist.
pub fn find_applications_by_user(
    conn: &Connection,
    user_id: i64,
) -> rusqlite::Result<Vec<ApplicationSummary>> {
    let mut stmt = conn.prepare(
        "SELECT x.id, x.expo_id, e.title AS expo_title, x.company_name, x.status, \
                x.booth_id, b.booth_number, x.created_at \
         FROM exhibitors x \
         LEFT JOIN expos e ON e.id = x.expo_id \
         LEFT JOIN booths b ON b.id = x.booth_id \
         WHERE x.user_id = ?1 \
         ORDER BY x.id",
    )?;
    let rows = stmt
        .query_map(params![user_id], |row| {
            Ok(ApplicationSummary {
                id: row.get("id")?,
                expo_id: row.get("expo_id")?,
                expo_title: row.get("expo_title")?,
                company_name: row.get("company_name")?,
                status: row.get("status")?,
                booth_id: row.get("booth_id")?,
                booth_number: row.get("booth_number")?,
                created_at: row.get("created_at")?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Approve an application and best-effort assign the first free booth of the
/// expo. Status change, booth claim and the exhibitor's back-reference all
/// commit in one transaction, so the two sides of the link always agree.
/// Absence of a free booth is not an error; the status change still lands.
pub fn approve_and_assign(
    conn: &mut Connection,
    exhibitor_id: i64,
    expo_id: i64,
) -> rusqlite::Result<Option<Booth>> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    tx.execute(
        "UPDATE exhibitors SET status = ?1 WHERE id = ?2",
        params![ExhibitorStatus::Approved, exhibitor_id],
    )?;

    let free_booth_id: Option<i64> = tx
        .query_row(
            "SELECT id FROM booths WHERE expo_id = ?1 AND is_available = 1 \
             ORDER BY id LIMIT 1",
            params![expo_id],
            |row| row.get(0),
        )
        .optional()?;

    let assigned = match free_booth_id {
        Some(booth_id) => {
            let claimed = tx.execute(
                "UPDATE booths SET is_available = 0, exhibitor_id = ?1 \
                 WHERE id = ?2 AND is_available = 1",
                params![exhibitor_id, booth_id],
            )?;
            if claimed > 0 {
                tx.execute(
                    "UPDATE exhibitors SET booth_id = ?1 WHERE id = ?2",
                    params![booth_id, exhibitor_id],
                )?;
                tx.query_row(
                    "SELECT id, expo_id, booth_number, is_available, exhibitor_id, created_at \
                     FROM booths WHERE id = ?1",
                    params![booth_id],
                    |row| {
                        Ok(Booth {
                            id: row.get("id")?,
                            expo_id: row.get("expo_id")?,
                            booth_number: row.get("booth_number")?,
                            is_available: row.get("is_available")?,
                            exhibitor_id: row.get("exhibitor_id")?,
                            created_at: row.get("created_at")?,
                        })
                    },
                )
                .optional()?
            } else {
                None
            }
        }
        None => None,
    };

    tx.commit()?;
    Ok(assigned)
}
