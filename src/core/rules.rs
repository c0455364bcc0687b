//! Input rules for form-level checks.
//!
//! The store only insists on a non-empty description and a positive amount. A form
//! layer can call these first to apply the stricter limits it shows to the user.

use crate::errors::{Error, Result};

/// Shortest accepted description, in characters, after trimming.
pub const DESCRIPTION_MIN_LEN: usize = 3;
/// Longest accepted description, in characters, after trimming.
pub const DESCRIPTION_MAX_LEN: usize = 50;

/// Checks a description against the form limits and returns it trimmed.
pub fn validate_description(text: &str) -> Result<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidDescription);
    }

    let length = trimmed.chars().count();
    if !(DESCRIPTION_MIN_LEN..=DESCRIPTION_MAX_LEN).contains(&length) {
        return Err(Error::DescriptionLength {
            length,
            min: DESCRIPTION_MIN_LEN,
            max: DESCRIPTION_MAX_LEN,
        });
    }

    Ok(trimmed)
}

/// Parses amount text; rejects non-numeric, non-finite and non-positive values.
pub fn parse_amount(text: &str) -> Result<f64> {
    let invalid = || Error::InvalidAmount {
        input: text.to_string(),
    };
    let amount: f64 = text.trim().parse().map_err(|_| invalid())?;
    ensure_positive_amount(amount).map_err(|_| invalid())
}

/// Accepts only finite amounts strictly greater than zero.
pub(crate) fn ensure_positive_amount(amount: f64) -> Result<f64> {
    if amount.is_finite() && amount > 0.0 {
        Ok(amount)
    } else {
        Err(Error::InvalidAmount {
            input: amount.to_string(),
        })
    }
}
