use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

/// Application status. There is no rejected state; an application stays
/// pending until an admin approves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExhibitorStatus {
    Pending,
    Approved,
}

impl ExhibitorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExhibitorStatus::Pending => "pending",
            ExhibitorStatus::Approved => "approved",
        }
    }
}

impl FromSql for ExhibitorStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "pending" => Ok(ExhibitorStatus::Pending),
            "approved" => Ok(ExhibitorStatus::Approved),
            _ => Err(FromSqlError::InvalidType),
        }
    }
}

impl ToSql for ExhibitorStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Exhibitor {
    pub id: i64,
    pub user_id: i64,
    pub expo_id: i64,
    pub company_name: String,
    pub status: ExhibitorStatus,
    pub booth_id: Option<i64>,
    pub created_at: String,
}

/// Exhibitor with the applicant's name and email joined in, for admin lists.
#[derive(Debug, Clone, Serialize)]
pub struct ExhibitorWithUser {
    pub id: i64,
    pub user_id: i64,
    pub expo_id: i64,
    pub company_name: String,
    pub status: ExhibitorStatus,
    pub booth_id: Option<i64>,
    pub user_name: String,
    pub user_email: String,
    pub created_at: String,
}

/// One application as the applying user sees it: which expo, which booth.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationSummary {
    pub id: i64,
    pub expo_id: i64,
    pub expo_title: Option<String>,
    pub company_name: String,
    pub status: ExhibitorStatus,
    pub booth_id: Option<i64>,
    pub booth_number: Option<String>,
    pub created_at: String,
}
