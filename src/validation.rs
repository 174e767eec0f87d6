//! Input validation applied at the request boundary, before any backend call.
//!
//! Every rule here is syntactic. Referential checks (does this country id
//! exist?) belong to the stored routines, not to this module.

use once_cell::sync::Lazy;
use regex::Regex;

/// Letters and whitespace only.
static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").unwrap());

/// Digits only.
static CELLPHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// A violated input rule, reported with the offending field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Validate a required name field: non-blank, letters and spaces only.
/// Returns the trimmed value.
pub fn required_name(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, "is required"));
    }
    if !NAME_RE.is_match(trimmed) {
        return Err(ValidationError::new(field, "contains invalid characters"));
    }
    Ok(trimmed.to_string())
}

/// Like [required_name] but with a maximum length on the trimmed value.
pub fn required_name_capped(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<String, ValidationError> {
    let trimmed = required_name(field, value)?;
    if trimmed.chars().count() > max {
        return Err(ValidationError::new(
            field,
            format!("must not exceed {max} characters"),
        ));
    }
    Ok(trimmed)
}

/// Validate an optional parent-name field. Absent or blank values are
/// treated as unset; present values must pass the name pattern and are
/// trimmed.
pub fn optional_name(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<String>, ValidationError> {
    match value {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => required_name(field, raw).map(Some),
    }
}

/// Validate a cellphone: at least 8 characters, digits only.
pub fn required_cellphone(field: &'static str, value: &str) -> Result<String, ValidationError> {
    if value.len() < 8 {
        return Err(ValidationError::new(
            field,
            "must be at least 8 characters",
        ));
    }
    if !CELLPHONE_RE.is_match(value) {
        return Err(ValidationError::new(field, "contains invalid characters"));
    }
    Ok(value.to_string())
}

/// Update targets must carry a non-zero id.
pub fn required_id(field: &'static str, id: i32) -> Result<i32, ValidationError> {
    if id == 0 {
        return Err(ValidationError::new(field, "is required"));
    }
    Ok(id)
}
