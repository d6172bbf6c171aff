use chrono::{NaiveDate, NaiveDateTime};

/// Validate a display name: required, max 100 chars.
pub fn validate_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Some("Name is required".to_string());
    }
    if trimmed.len() > 100 {
        return Some("Name must be at most 100 characters".to_string());
    }
    None
}

/// Validate an email: must contain '@' and '.', max 254 chars.
pub fn validate_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("Email is required".to_string());
    }
    if trimmed.len() > 254 {
        return Some("Email must be at most 254 characters".to_string());
    }
    if !trimmed.contains('@') || !trimmed.contains('.') {
        return Some("Email must be a valid address".to_string());
    }
    None
}

/// Validate a password: min 8 chars.
pub fn validate_password(password: &str) -> Option<String> {
    if password.is_empty() {
        return Some("Password is required".to_string());
    }
    if password.len() < 8 {
        return Some("Password must be at least 8 characters".to_string());
    }
    None
}

/// Validate a required text field with a max length.
pub fn validate_required(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_name} is required"));
    }
    if trimmed.len() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Validate a calendar date in ISO format (YYYY-MM-DD).
pub fn validate_date(value: &str, field_name: &str) -> Option<String> {
    if NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").is_err() {
        return Some(format!("{field_name} must be a date in YYYY-MM-DD format"));
    }
    None
}

/// Validate a timestamp. Accepts `YYYY-MM-DDTHH:MM:SS`, the space-separated
/// variant, or a bare date.
pub fn validate_datetime(value: &str, field_name: &str) -> Option<String> {
    let trimmed = value.trim();
    let ok = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S").is_ok()
        || NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S").is_ok()
        || NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").is_ok();
    if !ok {
        return Some(format!("{field_name} must be an ISO date or datetime"));
    }
    None
}
