use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::auth::guard::require_role;
use crate::auth::middleware::AuthUser;
use crate::auth::validate;
use crate::db::DbPool;
use crate::errors::ApiError;
use crate::models::exhibitor;
use crate::models::user::Role;

#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    pub expo_id: i64,
    pub company_name: String,
}

/// POST /api/exhibitors/apply (exhibitor). One application per (user, expo);
/// the expo id itself is not checked for existence.
pub async fn apply(
    pool: web::Data<DbPool>,
    user: AuthUser,
    body: web::Json<ApplyRequest>,
) -> Result<HttpResponse, ApiError> {
    require_role(&user, Role::Exhibitor)?;

    if let Some(err) = validate::validate_required(&body.company_name, "Company name", 200) {
        return Err(ApiError::Validation(err));
    }

    let conn = pool.get()?;
    if exhibitor::find_by_user_and_expo(&conn, user.id, body.expo_id)?.is_some() {
        return Err(ApiError::Conflict("Already applied".into()));
    }

    let id = exhibitor::create(&conn, user.id, body.expo_id, body.company_name.trim())?;
    let created = exhibitor::find_by_id(&conn, id)?.ok_or(ApiError::NotFound("Exhibitor"))?;
    Ok(HttpResponse::Created().json(created))
}

/// GET /api/exhibitors/pending (admin)
pub async fn pending(pool: web::Data<DbPool>, user: AuthUser) -> Result<HttpResponse, ApiError> {
    require_role(&user, Role::Admin)?;
    let conn = pool.get()?;
    let rows = exhibitor::find_pending(&conn)?;
    Ok(HttpResponse::Ok().json(rows))
}

/// PUT /api/exhibitors/approve/{id} (admin). Approves the application and
/// best-effort assigns the first free booth of the expo; no free booth is
/// not an error.
pub async fn approve(
    pool: web::Data<DbPool>,
    user: AuthUser,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    require_role(&user, Role::Admin)?;

    let id = path.into_inner();
    let mut conn = pool.get()?;
    let found = exhibitor::find_by_id(&conn, id)?.ok_or(ApiError::NotFound("Exhibitor"))?;

    let assigned = exhibitor::approve_and_assign(&mut conn, found.id, found.expo_id)?;
    let approved = exhibitor::find_by_id(&conn, id)?.ok_or(ApiError::NotFound("Exhibitor"))?;
    log::info!(
        "Exhibitor {} approved{}",
        id,
        assigned
            .as_ref()
            .map(|b| format!(", booth {} auto-assigned", b.booth_number))
            .unwrap_or_default()
    );

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "exhibitor": approved,
        "booth_assigned": assigned,
    })))
}

/// GET /api/exhibitors/expo/{expo_id} (any authenticated user)
pub async fn by_expo(
    pool: web::Data<DbPool>,
    _user: AuthUser,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let conn = pool.get()?;
    let rows = exhibitor::find_by_expo(&conn, path.into_inner())?;
    Ok(HttpResponse::Ok().json(rows))
}

/// GET /api/exhibitors/user (exhibitor): the caller's own applications.
pub async fn by_user(pool: web::Data<DbPool>, user: AuthUser) -> Result<HttpResponse, ApiError> {
    require_role(&user, Role::Exhibitor)?;
    let conn = pool.get()?;
    let rows = exhibitor::find_applications_by_user(&conn, user.id)?;
    Ok(HttpResponse::Ok().json(rows))
}

/// GET /api/exhibitors/{id} (admin): applicant contact info.
pub async fn contact(
    pool: web::Data<DbPool>,
    user: AuthUser,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    require_role(&user, Role::Admin)?;
    let conn = pool.get()?;
    let found = exhibitor::find_by_id_with_user(&conn, path.into_inner())?
        .ok_or(ApiError::NotFound("Exhibitor"))?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "user": { "name": found.user_name, "email": found.user_email },
    })))
}
