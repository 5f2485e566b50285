//! Input validation for the profile step.
//!
//! Validation runs before the engine sees any data. Each error's
//! `Display` is the exact message shown next to the offending input.

use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your estate value")]
    EstateMissing,
    #[error("Please enter a valid number")]
    EstateNotNumeric,
    #[error("Your estate value must be greater than £0")]
    EstateNotPositive,
    #[error("Please enter your name")]
    NameMissing,
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Please select your marital status")]
    MaritalStatusUnknown,
}

/// Parse and validate a raw estate value as typed by the user.
///
/// Currency symbols and thousands separators are stripped first, so
/// `"£1,250,000.50"` is accepted.
pub fn validate_estate_value(raw: &str) -> Result<Decimal, ValidationError> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, '£' | '$' | ','))
        .collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return Err(ValidationError::EstateMissing);
    }

    let value = Decimal::from_str(cleaned).map_err(|_| ValidationError::EstateNotNumeric)?;
    validate_estate_amount(value)
}

/// Validate an estate value that is already numeric.
pub fn validate_estate_amount(value: Decimal) -> Result<Decimal, ValidationError> {
    if value <= Decimal::ZERO {
        return Err(ValidationError::EstateNotPositive);
    }
    Ok(value)
}

/// Validate a display name, returning it trimmed.
pub fn validate_name(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::NameMissing);
    }
    if trimmed.chars().count() < 2 {
        return Err(ValidationError::NameTooShort);
    }
    Ok(trimmed.to_string())
}

/// Interpret a typed yes/no answer. `None` means the input was not recognised.
pub fn parse_answer(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "yes" | "y" | "true" | "1" => Some(true),
        "no" | "n" | "false" | "0" => Some(false),
        _ => None,
    }
}

pub fn answer_label(answer: bool) -> &'static str {
    if answer { "Yes" } else { "No" }
}
