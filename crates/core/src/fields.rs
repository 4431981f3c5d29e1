//! Field-level checks shared by the reference-entity create endpoints.

use crate::error::CoreError;

/// Longest accepted value for free-text name columns (`VARCHAR(255)`).
pub const MAX_NAME_LEN: usize = 255;

/// Require a non-blank string of at most [`MAX_NAME_LEN`] characters.
pub fn require_name(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be blank")));
    }
    if value.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Require a strictly positive integer.
pub fn require_positive(field: &str, value: i32) -> Result<(), CoreError> {
    if value <= 0 {
        return Err(CoreError::Validation(format!(
            "{field} must be greater than 0, got {value}"
        )));
    }
    Ok(())
}
