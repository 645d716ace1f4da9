//! Per-field form normalizers
//!
//! Each function takes the field name (for the error message) and the raw
//! text the input holds, and either produces the normalized value or a
//! [`ValidationError`] whose `Display` is the inline French message.
//!
//! Optional numeric fields treat an empty input as absent, not as an error.

use chrono::NaiveDate;

use crate::core::bill::ExpenseType;
use crate::core::error::ValidationError;

/// Field must hold a non-blank value.
pub fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField { field })
    } else {
        Ok(trimmed)
    }
}

/// Optional field that must parse as a number when present.
pub fn numeric(field: &'static str, value: &str) -> Result<Option<f64>, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| ValidationError::InvalidField {
            field,
            reason: format!("'{trimmed}' n'est pas un nombre"),
        })
}

/// Optional field kept as text on the wire but required to read as a number
/// when present (the VAT amount travels as a string).
pub fn numeric_text(field: &'static str, value: &str) -> Result<Option<String>, ValidationError> {
    numeric(field, value).map(|parsed| parsed.map(|_| value.trim().to_string()))
}

/// Integer field falling back to a default instead of erroring, matching the
/// form's historical behavior for the VAT percentage.
pub fn integer_or(default: u32, value: &str) -> u32 {
    value.trim().parse::<u32>().unwrap_or(default)
}

/// Required calendar date in ISO `AAAA-MM-JJ` form.
pub fn iso_date(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = required(field, value)?;
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|_| trimmed.to_string())
        .map_err(|_| ValidationError::InvalidField {
            field,
            reason: format!("'{trimmed}' doit être au format AAAA-MM-JJ"),
        })
}

/// Required membership in the expense category catalogue.
pub fn in_catalogue(field: &'static str, value: &str) -> Result<ExpenseType, ValidationError> {
    let trimmed = required(field, value)?;
    ExpenseType::from_label(trimmed).ok_or_else(|| ValidationError::InvalidField {
        field,
        reason: format!("'{trimmed}' n'est pas une catégorie de dépense"),
    })
}

/// Free-text field, absent when blank.
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
