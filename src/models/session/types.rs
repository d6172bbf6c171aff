use serde::Serialize;

/// A scheduled sub-event within an expo.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: i64,
    pub expo_id: i64,
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    pub created_at: String,
}

pub struct NewSession {
    pub expo_id: i64,
    pub title: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Default)]
pub struct SessionPatch {
    pub title: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}
