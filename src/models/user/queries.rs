use rusqlite::{Connection, OptionalExtension, params};

use super::types::{NewUser, User};

const SELECT_USER: &str =
    "SELECT id, name, email, password, role, created_at FROM users";

fn row_to_user(row: &rusqlite::Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        password: row.get("password")?,
        role: row.get("role")?,
        created_at: row.get("created_at")?,
    })
}

pub fn find_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<User>> {
    conn.query_row(
        &format!("{SELECT_USER} WHERE id = ?1"),
        params![id],
        row_to_user,
    )
    .optional()
}

/// Find a user by email for login and for the signup duplicate pre-check.
pub fn find_by_email(conn: &Connection, email: &str) -> rusqlite::Result<Option<User>> {
    conn.query_row(
        &format!("{SELECT_USER} WHERE email = ?1"),
        params![email],
        row_to_user,
    )
    .optional()
}

pub fn create(conn: &Connection, new: &NewUser) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO users (name, email, password, role) VALUES (?1, ?2, ?3, ?4)",
        params![new.name, new.email, new.password, new.role],
    )?;
    Ok(conn.last_insert_rowid())
}
