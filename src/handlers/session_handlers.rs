use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::auth::guard::require_role;
use crate::auth::middleware::AuthUser;
use crate::auth::validate;
use crate::db::DbPool;
use crate::errors::ApiError;
use crate::models::session;
use crate::models::user::Role;

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub expo_id: i64,
    pub title: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSessionRequest {
    pub title: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// POST /api/sessions (admin)
pub async fn create(
    pool: web::Data<DbPool>,
    user: AuthUser,
    body: web::Json<CreateSessionRequest>,
) -> Result<HttpResponse, ApiError> {
    require_role(&user, Role::Admin)?;

    let mut errors = Vec::new();
    errors.extend(validate::validate_required(&body.title, "Title", 200));
    if !body.start_time.is_empty() {
        errors.extend(validate::validate_datetime(&body.start_time, "Start time"));
    }
    if !body.end_time.is_empty() {
        errors.extend(validate::validate_datetime(&body.end_time, "End time"));
    }
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors.join("; ")));
    }

    let conn = pool.get()?;
    let id = session::create(
        &conn,
        &session::NewSession {
            expo_id: body.expo_id,
            title: body.title.trim().to_string(),
            start_time: body.start_time.trim().to_string(),
            end_time: body.end_time.trim().to_string(),
        },
    )?;
    let created = session::find_by_id(&conn, id)?.ok_or(ApiError::NotFound("Session"))?;
    Ok(HttpResponse::Created().json(created))
}

/// PUT /api/sessions/{id} (admin): partial overwrite.
pub async fn update(
    pool: web::Data<DbPool>,
    user: AuthUser,
    path: web::Path<i64>,
    body: web::Json<UpdateSessionRequest>,
) -> Result<HttpResponse, ApiError> {
    require_role(&user, Role::Admin)?;

    let mut errors = Vec::new();
    if let Some(title) = &body.title {
        errors.extend(validate::validate_required(title, "Title", 200));
    }
    if let Some(start) = &body.start_time {
        errors.extend(validate::validate_datetime(start, "Start time"));
    }
    if let Some(end) = &body.end_time {
        errors.extend(validate::validate_datetime(end, "End time"));
    }
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors.join("; ")));
    }

    let id = path.into_inner();
    let patch = session::SessionPatch {
        title: body.title.clone(),
        start_time: body.start_time.clone(),
        end_time: body.end_time.clone(),
    };

    let conn = pool.get()?;
    if !session::update(&conn, id, &patch)? {
        return Err(ApiError::NotFound("Session"));
    }
    let updated = session::find_by_id(&conn, id)?.ok_or(ApiError::NotFound("Session"))?;
    Ok(HttpResponse::Ok().json(updated))
}

/// GET /api/sessions/expo/{expo_id} (any authenticated user)
pub async fn by_expo(
    pool: web::Data<DbPool>,
    _user: AuthUser,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let conn = pool.get()?;
    let sessions = session::find_by_expo(&conn, path.into_inner())?;
    Ok(HttpResponse::Ok().json(sessions))
}
