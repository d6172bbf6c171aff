use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use std::future::{Ready, ready};

use crate::auth::token::TokenService;
use crate::db::DbPool;
use crate::errors::ApiError;
use crate::models::user::{self, Role};

/// The authenticated caller, resolved from the `Authorization: Bearer` header.
///
/// The token only carries the user id. The full record, including the role,
/// is loaded from the users table on every request so that a stale or
/// tampered token payload can never widen a caller's access.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl FromRequest for AuthUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthUser, ApiError> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::Unauthorized)?;
    let token = header_value
        .strip_prefix("Bearer ")
        .ok_or(ApiError::Unauthorized)?;

    let tokens = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| ApiError::Internal("TokenService not configured".to_string()))?;
    let claims = tokens.verify(token).map_err(|_| ApiError::Unauthorized)?;

    let pool = req
        .app_data::<web::Data<DbPool>>()
        .ok_or_else(|| ApiError::Internal("DbPool not configured".to_string()))?;
    let conn = pool.get()?;
    let u = user::find_by_id(&conn, claims.sub)?.ok_or(ApiError::Unauthorized)?;

    Ok(AuthUser {
        id: u.id,
        name: u.name,
        email: u.email,
        role: u.role,
    })
}
