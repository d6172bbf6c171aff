use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::auth::guard::require_role;
use crate::auth::middleware::AuthUser;
use crate::auth::validate;
use crate::db::DbPool;
use crate::errors::ApiError;
use crate::models::expo;
use crate::models::user::Role;

#[derive(Debug, Deserialize)]
pub struct CreateExpoRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateExpoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// POST /api/expos (admin)
pub async fn create(
    pool: web::Data<DbPool>,
    user: AuthUser,
    body: web::Json<CreateExpoRequest>,
) -> Result<HttpResponse, ApiError> {
    require_role(&user, Role::Admin)?;

    let mut errors = Vec::new();
    errors.extend(validate::validate_required(&body.title, "Title", 200));
    errors.extend(validate::validate_date(&body.start_date, "Start date"));
    errors.extend(validate::validate_date(&body.end_date, "End date"));
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors.join("; ")));
    }
    let start = NaiveDate::parse_from_str(body.start_date.trim(), "%Y-%m-%d");
    let end = NaiveDate::parse_from_str(body.end_date.trim(), "%Y-%m-%d");
    if let (Ok(start), Ok(end)) = (start, end)
        && end < start
    {
        return Err(ApiError::Validation("End date must not precede start date".into()));
    }

    let conn = pool.get()?;
    let id = expo::create(
        &conn,
        &expo::NewExpo {
            title: body.title.trim().to_string(),
            description: body.description.clone(),
            location: body.location.clone(),
            start_date: body.start_date.trim().to_string(),
            end_date: body.end_date.trim().to_string(),
            created_by: user.id,
        },
    )?;
    let created = expo::find_by_id(&conn, id)?.ok_or(ApiError::NotFound("Expo"))?;
    Ok(HttpResponse::Created().json(created))
}

/// GET /api/expos (public)
pub async fn list(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    let conn = pool.get()?;
    let expos = expo::find_all(&conn)?;
    Ok(HttpResponse::Ok().json(expos))
}

/// GET /api/expos/{id} (public)
pub async fn read(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let conn = pool.get()?;
    let found = expo::find_by_id(&conn, path.into_inner())?.ok_or(ApiError::NotFound("Expo"))?;
    Ok(HttpResponse::Ok().json(found))
}

/// PUT /api/expos/{id} (admin). Partial overwrite; date ordering is not
/// re-validated on update.
pub async fn update(
    pool: web::Data<DbPool>,
    user: AuthUser,
    path: web::Path<i64>,
    body: web::Json<UpdateExpoRequest>,
) -> Result<HttpResponse, ApiError> {
    require_role(&user, Role::Admin)?;

    let mut errors = Vec::new();
    if let Some(title) = &body.title {
        errors.extend(validate::validate_required(title, "Title", 200));
    }
    if let Some(start) = &body.start_date {
        errors.extend(validate::validate_date(start, "Start date"));
    }
    if let Some(end) = &body.end_date {
        errors.extend(validate::validate_date(end, "End date"));
    }
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors.join("; ")));
    }

    let id = path.into_inner();
    let patch = expo::ExpoPatch {
        title: body.title.clone(),
        description: body.description.clone(),
        location: body.location.clone(),
        start_date: body.start_date.clone(),
        end_date: body.end_date.clone(),
    };

    let conn = pool.get()?;
    if !expo::update(&conn, id, &patch)? {
        return Err(ApiError::NotFound("Expo"));
    }
    let updated = expo::find_by_id(&conn, id)?.ok_or(ApiError::NotFound("Expo"))?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/expos/{id} (admin). Removes the expo with its booths and
/// sessions; exhibitor applications and registrations stay untouched.
pub async fn delete(
    pool: web::Data<DbPool>,
    user: AuthUser,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    require_role(&user, Role::Admin)?;

    let id = path.into_inner();
    let mut conn = pool.get()?;
    if !expo::delete_with_children(&mut conn, id)? {
        return Err(ApiError::NotFound("Expo"));
    }
    log::info!("Expo {id} deleted");
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Expo deleted" })))
}
