//! Form validation helpers
//!
//! Centralized text length limits and field parsers. Forms arrive as raw
//! strings; every helper returns the parsed value or a [`FieldError`]
//! naming the offending form field. Cross-field rules (date ordering,
//! salary ranges) live in the per-entity `validate()` implementations and
//! always compare the submitted values, never stored ones.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

// ── Text length limits ──────────────────────────────────────────────

/// Person names (first/last)
pub const MAX_NAME_LEN: usize = 50;

/// Email addresses
pub const MAX_EMAIL_LEN: usize = 100;

/// Phone numbers
pub const MAX_PHONE_LEN: usize = 15;

/// Job titles, department names, instructor names
pub const MAX_TITLE_LEN: usize = 100;

/// Training session titles
pub const MAX_SESSION_TITLE_LEN: usize = 200;

/// Department locations
pub const MAX_LOCATION_LEN: usize = 200;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Descriptions, reasons, comments
pub const MAX_TEXT_LEN: usize = 2000;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Accumulates field errors while keeping the happy-path values.
///
/// ```ignore
/// let mut errors = Vec::new();
/// let name = errors.take(validation::required_text(&form.name, "name", MAX_NAME_LEN));
/// ```
pub trait ErrorSink {
    fn take<T>(&mut self, result: Result<T, FieldError>) -> Option<T>;
}

impl ErrorSink for Vec<FieldError> {
    fn take<T>(&mut self, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.push(err);
                None
            }
        }
    }
}

// ── Field parsers ───────────────────────────────────────────────────

/// Required, non-empty text within the length limit. Returns the trimmed value.
pub fn required_text(value: &str, field: &str, max_len: usize) -> Result<String, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(field, format!("{field} is required")));
    }
    if trimmed.len() > max_len {
        return Err(FieldError::new(
            field,
            format!("{field} is too long ({} chars, max {max_len})", trimmed.len()),
        ));
    }
    Ok(trimmed.to_string())
}

/// Optional text within the length limit; empty input becomes `None`.
pub fn optional_text(value: &str, field: &str, max_len: usize) -> Result<Option<String>, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if trimmed.len() > max_len {
        return Err(FieldError::new(
            field,
            format!("{field} is too long ({} chars, max {max_len})", trimmed.len()),
        ));
    }
    Ok(Some(trimmed.to_string()))
}

/// Required ISO date (YYYY-MM-DD).
pub fn required_date(value: &str, field: &str) -> Result<NaiveDate, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(field, format!("{field} is required")));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| FieldError::new(field, format!("{field} must be a valid date (YYYY-MM-DD)")))
}

/// Optional ISO date; empty input becomes `None`.
pub fn optional_date(value: &str, field: &str) -> Result<Option<NaiveDate>, FieldError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    required_date(value, field).map(Some)
}

/// Required time of day (HH:MM, seconds tolerated).
pub fn required_time(value: &str, field: &str) -> Result<NaiveTime, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(field, format!("{field} is required")));
    }
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| FieldError::new(field, format!("{field} must be a valid time (HH:MM)")))
}

/// Optional time of day; empty input becomes `None`.
pub fn optional_time(value: &str, field: &str) -> Result<Option<NaiveTime>, FieldError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    required_time(value, field).map(Some)
}

/// Required record key (positive integer, as submitted by a select input).
pub fn required_id(value: &str, field: &str) -> Result<i64, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(field, format!("{field} is required")));
    }
    match trimmed.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(FieldError::new(field, format!("{field} must be a valid selection"))),
    }
}

/// Optional record key; empty input becomes `None`.
pub fn optional_id(value: &str, field: &str) -> Result<Option<i64>, FieldError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    required_id(value, field).map(Some)
}

/// Required non-negative amount (salaries, pay, deductions).
pub fn required_amount(value: &str, field: &str) -> Result<f64, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(field, format!("{field} is required")));
    }
    match trimmed.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(amount),
        _ => Err(FieldError::new(
            field,
            format!("{field} must be a non-negative amount"),
        )),
    }
}

/// Optional non-negative amount; empty input falls back to the default.
pub fn amount_or_default(value: &str, field: &str, default: f64) -> Result<f64, FieldError> {
    if value.trim().is_empty() {
        return Ok(default);
    }
    required_amount(value, field)
}

/// Required number within an inclusive range (evaluation ratings).
pub fn required_range(value: &str, field: &str, min: f64, max: f64) -> Result<f64, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(field, format!("{field} is required")));
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v >= min && v <= max => Ok(v),
        _ => Err(FieldError::new(
            field,
            format!("{field} must be between {min} and {max}"),
        )),
    }
}

/// Required enum-valued field (status, grade, leave type).
pub fn required_enum<T: FromStr>(value: &str, field: &str) -> Result<T, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(field, format!("{field} is required")));
    }
    trimmed
        .parse::<T>()
        .map_err(|_| FieldError::new(field, format!("{field} has an invalid value")))
}

/// Optional enum-valued field; empty input becomes `None`.
pub fn optional_enum<T: FromStr>(value: &str, field: &str) -> Result<Option<T>, FieldError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    required_enum(value, field).map(Some)
}

/// Required CNIC in `NNNNN-NNNNNNN-N` form.
pub fn required_cnic(value: &str, field: &str) -> Result<String, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(field, format!("{field} is required")));
    }
    if !is_cnic(trimmed) {
        return Err(FieldError::new(
            field,
            format!("{field} format invalid: 12345-1234567-1"),
        ));
    }
    Ok(trimmed.to_string())
}

/// Required email address.
pub fn required_email(value: &str, field: &str, max_len: usize) -> Result<String, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(field, format!("{field} is required")));
    }
    if trimmed.len() > max_len || !is_email(trimmed) {
        return Err(FieldError::new(field, format!("{field} must be a valid email")));
    }
    Ok(trimmed.to_string())
}

fn is_cnic(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 15
        && bytes.iter().enumerate().all(|(i, b)| {
            if i == 5 || i == 13 {
                *b == b'-'
            } else {
                b.is_ascii_digit()
            }
        })
}

fn is_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && domain.contains('.')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cnic_format() {
        assert!(is_cnic("12345-1234567-1"));
        assert!(!is_cnic("12345-1234567-12"));
        assert!(!is_cnic("1234-51234567-1"));
        assert!(!is_cnic("12345-123456a-1"));
        assert!(!is_cnic(""));
    }

    #[test]
    fn email_format() {
        assert!(is_email("hr@example.com"));
        assert!(is_email("first.last@corp.example.org"));
        assert!(!is_email("no-at-sign"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("user@"));
        assert!(!is_email("user@nodot"));
        assert!(!is_email("user name@example.com"));
    }

    #[test]
    fn required_text_trims_and_bounds() {
        assert_eq!(required_text("  Ada  ", "name", 10).as_deref(), Ok("Ada"));
        assert!(required_text("   ", "name", 10).is_err());
        assert!(required_text("toolongvalue", "name", 5).is_err());
    }

    #[test]
    fn amount_rules() {
        assert_eq!(required_amount("120.50", "grossPay"), Ok(120.5));
        assert!(required_amount("-1", "grossPay").is_err());
        assert!(required_amount("NaN", "grossPay").is_err());
        assert_eq!(amount_or_default("", "deductions", 0.0), Ok(0.0));
    }

    #[test]
    fn range_is_boundary_inclusive() {
        assert_eq!(required_range("1.0", "rating", 1.0, 5.0), Ok(1.0));
        assert_eq!(required_range("5.0", "rating", 1.0, 5.0), Ok(5.0));
        assert!(required_range("0.99", "rating", 1.0, 5.0).is_err());
        assert!(required_range("5.01", "rating", 1.0, 5.0).is_err());
    }

    #[test]
    fn time_accepts_hh_mm() {
        assert!(required_time("09:30", "timeIn").is_ok());
        assert!(required_time("23:59:59", "timeIn").is_ok());
        assert!(required_time("24:00", "timeIn").is_err());
        assert!(required_time("morning", "timeIn").is_err());
    }
}
