use std::sync::LazyLock;

use regex::Regex;

use crate::error::{AppError, FieldError};
use crate::routes::contact::ContactRequest;

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 100;
pub const MESSAGE_MIN: usize = 5;
pub const MESSAGE_MAX: usize = 2000;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// Structural checks only: lengths in characters, email syntax. All violated
/// fields are reported together.
pub fn validate_contact(req: &ContactRequest) -> Result<(), AppError> {
    let mut errors = Vec::new();

    check_length(&mut errors, "name", &req.name, NAME_MIN, NAME_MAX);

    if !EMAIL_RE.is_match(&req.email) {
        errors.push(FieldError {
            field: "email",
            message: "must be a valid email address".to_string(),
        });
    }

    check_length(&mut errors, "message", &req.message, MESSAGE_MIN, MESSAGE_MAX);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

fn check_length(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) {
    let len = value.chars().count();
    if len < min {
        errors.push(FieldError {
            field,
            message: format!("too short: minimum {min} characters"),
        });
    } else if len > max {
        errors.push(FieldError {
            field,
            message: format!("too long: maximum {max} characters"),
        });
    }
}
