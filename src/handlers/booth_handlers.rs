use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::auth::guard::require_role;
use crate::auth::middleware::AuthUser;
use crate::auth::validate;
use crate::db::DbPool;
use crate::errors::ApiError;
use crate::models::user::Role;
use crate::models::{booth, exhibitor};

#[derive(Debug, Deserialize)]
pub struct NewBoothRequest {
    pub expo_id: i64,
    pub booth_number: String,
}

/// POST /api/booths (admin): bulk-create booths.
pub async fn create_bulk(
    pool: web::Data<DbPool>,
    user: AuthUser,
    body: web::Json<Vec<NewBoothRequest>>,
) -> Result<HttpResponse, ApiError> {
    require_role(&user, Role::Admin)?;

    if body.is_empty() {
        return Err(ApiError::Validation("At least one booth is required".into()));
    }
    for item in body.iter() {
        if let Some(err) = validate::validate_required(&item.booth_number, "Booth number", 50) {
            return Err(ApiError::Validation(err));
        }
    }

    let items: Vec<booth::NewBooth> = body
        .iter()
        .map(|b| booth::NewBooth {
            expo_id: b.expo_id,
            booth_number: b.booth_number.trim().to_string(),
        })
        .collect();

    let mut conn = pool.get()?;
    let created = booth::create_bulk(&mut conn, &items)?;
    log::info!("Created {} booths", created.len());
    Ok(HttpResponse::Created().json(created))
}

/// GET /api/booths/available/{expo_id} (any authenticated user): booths of
/// an expo with availability and occupant email.
pub async fn available(
    pool: web::Data<DbPool>,
    _user: AuthUser,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let conn = pool.get()?;
    let booths = booth::availability_by_expo(&conn, path.into_inner())?;
    Ok(HttpResponse::Ok().json(booths))
}

/// PUT /api/booths/select/{booth_id} (exhibitor): claim a booth.
///
/// The claim itself is a conditional update inside one transaction, so two
/// exhibitors racing for the same booth cannot both win; the loser gets the
/// same Conflict as a sequential late-comer.
pub async fn select(
    pool: web::Data<DbPool>,
    user: AuthUser,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    require_role(&user, Role::Exhibitor)?;

    let booth_id = path.into_inner();
    let mut conn = pool.get()?;

    let found = booth::find_by_id(&conn, booth_id)?.ok_or(ApiError::NotFound("Booth"))?;
    if !found.is_available {
        return Err(ApiError::Conflict("Booth not available".into()));
    }

    let applicant = exhibitor::find_approved(&conn, user.id, found.expo_id)?
        .ok_or_else(|| ApiError::Forbidden("You are not approved for this expo".into()))?;

    if !booth::claim(&mut conn, booth_id, applicant.id)? {
        return Err(ApiError::Conflict("Booth not available".into()));
    }

    let claimed = booth::find_by_id(&conn, booth_id)?.ok_or(ApiError::NotFound("Booth"))?;
    let updated = exhibitor::find_by_id(&conn, applicant.id)?
        .ok_or(ApiError::NotFound("Exhibitor"))?;
    log::info!(
        "Booth {} claimed by exhibitor {}",
        claimed.booth_number,
        updated.id
    );

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "booth": claimed,
        "exhibitor": updated,
    })))
}

/// GET /api/booths/expo/{expo_id} (admin): occupancy listing.
pub async fn by_expo(
    pool: web::Data<DbPool>,
    user: AuthUser,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    require_role(&user, Role::Admin)?;
    let conn = pool.get()?;
    let booths = booth::occupancy_by_expo(&conn, path.into_inner())?;
    Ok(HttpResponse::Ok().json(booths))
}
