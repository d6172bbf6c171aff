//! Role checks for protected handlers.
//!
//! Checks are plain functions returning a typed result, composed at the top
//! of each handler before any database work, rather than buried in routing
//! middleware.

use crate::auth::middleware::AuthUser;
use crate::errors::ApiError;
use crate::models::user::Role;

/// Require an exact role. The error body matches the fixed "<Role> only"
/// message the clients key their messaging on.
pub fn require_role(user: &AuthUser, role: Role) -> Result<(), ApiError> {
    if user.role == role {
        Ok(())
    } else {
        Err(ApiError::Forbidden(format!("{} only", role.label())))
    }
}
