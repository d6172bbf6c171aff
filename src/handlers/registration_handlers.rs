use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::auth::guard::require_role;
use crate::auth::middleware::AuthUser;
use crate::db::DbPool;
use crate::errors::ApiError;
use crate::models::user::Role;
use crate::models::{registration, session};

#[derive(Debug, Deserialize)]
pub struct ExpoRegistrationRequest {
    pub expo_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct SessionRegistrationRequest {
    pub expo_id: i64,
    pub session_id: i64,
}

/// POST /api/registrations/expo (attendee)
pub async fn register_expo(
    pool: web::Data<DbPool>,
    user: AuthUser,
    body: web::Json<ExpoRegistrationRequest>,
) -> Result<HttpResponse, ApiError> {
    require_role(&user, Role::Attendee)?;

    let conn = pool.get()?;
    if registration::exists_for_expo(&conn, user.id, body.expo_id)? {
        return Err(ApiError::Conflict("Already registered".into()));
    }

    let id = registration::create_for_expo(&conn, user.id, body.expo_id)?;
    let created =
        registration::find_by_id(&conn, id)?.ok_or(ApiError::NotFound("Registration"))?;
    Ok(HttpResponse::Created().json(created))
}

/// POST /api/registrations/session (attendee). Session registrations have
/// their own uniqueness key; an expo registration neither implies nor blocks
/// one.
pub async fn register_session(
    pool: web::Data<DbPool>,
    user: AuthUser,
    body: web::Json<SessionRegistrationRequest>,
) -> Result<HttpResponse, ApiError> {
    require_role(&user, Role::Attendee)?;

    let conn = pool.get()?;
    session::find_by_id(&conn, body.session_id)?.ok_or(ApiError::NotFound("Session"))?;

    if registration::exists_for_session(&conn, user.id, body.session_id)? {
        return Err(ApiError::Conflict("Already registered for this session".into()));
    }

    let id = registration::create_for_session(&conn, user.id, body.expo_id, body.session_id)?;
    let created =
        registration::find_by_id(&conn, id)?.ok_or(ApiError::NotFound("Registration"))?;
    Ok(HttpResponse::Created().json(created))
}

/// GET /api/registrations/user (any authenticated user)
pub async fn by_user(pool: web::Data<DbPool>, user: AuthUser) -> Result<HttpResponse, ApiError> {
    let conn = pool.get()?;
    let rows = registration::find_by_user(&conn, user.id)?;
    Ok(HttpResponse::Ok().json(rows))
}
