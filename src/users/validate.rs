use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ApiError;

use super::dto::UserPayload;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex =
            Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Field validation shared by create and update. Checks run in order:
/// name, age, email format. Uniqueness is the registry's concern.
pub(crate) fn validate_payload(payload: &UserPayload) -> Result<(), ApiError> {
    if payload.name.is_empty() {
        return Err(ApiError::BadRequest("Name is required".into()));
    }
    if payload.age <= 18 {
        return Err(ApiError::BadRequest("Age must be above 18".into()));
    }
    if !is_valid_email(&payload.email) {
        return Err(ApiError::BadRequest("Invalid email format".into()));
    }
    Ok(())
}
