use serde::Serialize;

/// Expo row with creator name/email joined in for display.
#[derive(Debug, Clone, Serialize)]
pub struct Expo {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub created_by: i64,
    pub creator_name: String,
    pub creator_email: String,
    pub created_at: String,
}

pub struct NewExpo {
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub created_by: i64,
}

/// Partial-field overwrite for updates. `None` leaves the column untouched.
#[derive(Debug, Default)]
pub struct ExpoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}
