use serde::Serialize;

/// An attendee's intent to attend an expo, or one session within it when
/// `session_id` is set.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub id: i64,
    pub user_id: i64,
    pub expo_id: i64,
    pub session_id: Option<i64>,
    pub created_at: String,
}
