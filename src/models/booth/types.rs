use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Booth {
    pub id: i64,
    pub expo_id: i64,
    pub booth_number: String,
    pub is_available: bool,
    pub exhibitor_id: Option<i64>,
    pub created_at: String,
}

/// Floor-plan view for exhibitors picking a booth: number, availability and
/// the occupant's email when taken.
#[derive(Debug, Clone, Serialize)]
pub struct BoothAvailability {
    pub id: i64,
    pub booth_number: String,
    pub is_available: bool,
    pub exhibitor_email: Option<String>,
}

/// Admin occupancy view with the occupant's company and contact.
#[derive(Debug, Clone, Serialize)]
pub struct BoothOccupancy {
    pub id: i64,
    pub booth_number: String,
    pub status: String,
    pub company_name: Option<String>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
}

pub struct NewBooth {
    pub expo_id: i64,
    pub booth_number: String,
}
