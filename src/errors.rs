use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use std::fmt;

/// Application error taxonomy. Everything renders as a fixed-shape JSON body
/// `{"message": "..."}` with the matching status code; internal causes are
/// logged and reported with a generic message.
#[derive(Debug)]
pub enum ApiError {
    Unauthorized,
    Forbidden(String),
    NotFound(&'static str),
    Conflict(String),
    Validation(String),
    RateLimited,
    Db(rusqlite::Error),
    Pool(r2d2::Error),
    Hash(String),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "Not authorized"),
            ApiError::Forbidden(msg) => write!(f, "{msg}"),
            ApiError::NotFound(what) => write!(f, "{what} not found"),
            ApiError::Conflict(msg) => write!(f, "{msg}"),
            ApiError::Validation(msg) => write!(f, "{msg}"),
            ApiError::RateLimited => {
                write!(f, "Too many failed login attempts, try again later")
            }
            ApiError::Db(e) => write!(f, "Database error: {e}"),
            ApiError::Pool(e) => write!(f, "Pool error: {e}"),
            ApiError::Hash(e) => write!(f, "Hash error: {e}"),
            ApiError::Internal(e) => write!(f, "Internal error: {e}"),
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Unauthorized => {
                HttpResponse::Unauthorized().json(json!({ "message": self.to_string() }))
            }
            ApiError::Forbidden(_) => {
                HttpResponse::Forbidden().json(json!({ "message": self.to_string() }))
            }
            ApiError::NotFound(_) => {
                HttpResponse::NotFound().json(json!({ "message": self.to_string() }))
            }
            ApiError::Conflict(_) => {
                HttpResponse::Conflict().json(json!({ "message": self.to_string() }))
            }
            ApiError::Validation(_) => {
                HttpResponse::BadRequest().json(json!({ "message": self.to_string() }))
            }
            ApiError::RateLimited => {
                HttpResponse::TooManyRequests().json(json!({ "message": self.to_string() }))
            }
            _ => {
                log::error!("{self}");
                HttpResponse::InternalServerError()
                    .json(json!({ "message": "Internal server error" }))
            }
        }
    }
}

impl From<rusqlite::Error> for ApiError {
    fn from(e: rusqlite::Error) -> Self {
        ApiError::Db(e)
    }
}

impl From<r2d2::Error> for ApiError {
    fn from(e: r2d2::Error) -> Self {
        ApiError::Pool(e)
    }
}
