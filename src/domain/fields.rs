// src/domain/fields.rs
//! Normalization shared by the free-form text columns of artists, promotions
//! and managers. Inputs are trimmed; blank optional values collapse to `None`.

use crate::domain::errors::{DomainError, DomainResult};
use validator::ValidateEmail;

/// Upper bound of every `VARCHAR(255)` column.
pub const MAX_SHORT_TEXT: usize = 255;

pub fn required_text(field: &str, value: impl Into<String>, max: usize) -> DomainResult<String> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(format!("{field} is required")));
    }
    ensure_max_len(field, trimmed, max)?;
    Ok(trimmed.to_string())
}

pub fn optional_text(
    field: &str,
    value: Option<String>,
    max: Option<usize>,
) -> DomainResult<Option<String>> {
    let Some(value) = value else {
        return Ok(None);
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if let Some(max) = max {
        ensure_max_len(field, trimmed, max)?;
    }
    Ok(Some(trimmed.to_string()))
}

/// Trimmed, length-checked e-mail address in HTML form-validation shape.
pub fn email(field: &str, value: impl Into<String>) -> DomainResult<String> {
    let value = required_text(field, value, MAX_SHORT_TEXT)?;
    if !value.validate_email() {
        return Err(DomainError::Validation(format!(
            "{field} must be a valid email address"
        )));
    }
    Ok(value)
}

fn ensure_max_len(field: &str, value: &str, max: usize) -> DomainResult<()> {
    if value.chars().count() > max {
        return Err(DomainError::Validation(format!(
            "{field} must not exceed {max} characters"
        )));
    }
    Ok(())
}
