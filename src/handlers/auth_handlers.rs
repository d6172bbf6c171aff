use actix_web::{HttpRequest, HttpResponse, web};
use serde::{Deserialize, Serialize};

use crate::auth::rate_limit::RateLimiter;
use crate::auth::token::TokenService;
use crate::auth::{password, validate};
use crate::db::DbPool;
use crate::errors::ApiError;
use crate::models::user::{self, NewUser, Role, UserPublic};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserPublic,
    pub token: String,
}

/// POST /api/auth/register
pub async fn register(
    pool: web::Data<DbPool>,
    tokens: web::Data<TokenService>,
    body: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    let mut errors = Vec::new();
    errors.extend(validate::validate_name(&body.name));
    errors.extend(validate::validate_email(&body.email));
    errors.extend(validate::validate_password(&body.password));
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors.join("; ")));
    }
    let role = Role::parse(&body.role)
        .ok_or_else(|| ApiError::Validation("Role must be admin, exhibitor or attendee".into()))?;

    let conn = pool.get()?;
    let email = body.email.trim().to_string();
    if user::find_by_email(&conn, &email)?.is_some() {
        return Err(ApiError::Conflict("Email already registered".into()));
    }

    let hashed = password::hash_password(&body.password).map_err(ApiError::Hash)?;
    let new_user = NewUser {
        name: body.name.trim().to_string(),
        email,
        password: hashed,
        role,
    };
    let id = user::create(&conn, &new_user)?;
    let created = user::find_by_id(&conn, id)?.ok_or(ApiError::NotFound("User"))?;

    let token = tokens
        .issue(id)
        .map_err(|e| ApiError::Internal(format!("Token issue failed: {e}")))?;
    log::info!("User {} registered as {}", created.email, role.as_str());

    Ok(HttpResponse::Created().json(AuthResponse {
        user: created.into(),
        token,
    }))
}

/// POST /api/auth/login
pub async fn login(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    tokens: web::Data<TokenService>,
    limiter: web::Data<RateLimiter>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    // Throttle check before touching the database
    let ip = req
        .peer_addr()
        .map(|addr| addr.ip())
        .unwrap_or_else(|| std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED));
    if limiter.is_blocked(ip) {
        return Err(ApiError::RateLimited);
    }

    let conn = pool.get()?;
    let found = user::find_by_email(&conn, body.email.trim())?;

    let u = match found {
        Some(u) if password::verify_password(&body.password, &u.password).unwrap_or(false) => {
            limiter.clear(ip);
            u
        }
        _ => {
            limiter.record_failure(ip);
            return Err(ApiError::Unauthorized);
        }
    };

    let token = tokens
        .issue(u.id)
        .map_err(|e| ApiError::Internal(format!("Token issue failed: {e}")))?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        user: u.into(),
        token,
    }))
}
