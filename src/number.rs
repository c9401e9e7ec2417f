//! Phone number parsing and validation.
//!
//! Input is normalized to international form (leading `+`) and parsed
//! against the libphonenumber metadata shipped with the `phonenumber` crate.
//! An unallocated number is not a parse error: it parses, with `is_valid`
//! set to false.

use phonenumber::{Mode, PhoneNumber};
use thiserror::Error;

/// Number parsing errors.
#[derive(Debug, Error)]
pub enum NumberError {
    #[error("No phone number entered")]
    Empty,
    #[error("Error parsing number '{input}': {reason}")]
    Malformed { input: String, reason: String },
}

/// A parsed phone number.
#[derive(Debug, Clone)]
pub struct ParsedNumber {
    pub country_code: u16,
    pub national_number: u64,
    pub is_valid: bool,
    /// The normalized input (always starts with `+`).
    pub normalized: String,
    inner: PhoneNumber,
}

impl ParsedNumber {
    /// ISO 3166-1 alpha-2 region for the number, when the metadata knows it.
    pub fn region_code(&self) -> Option<String> {
        self.inner.country().id().map(|id| format!("{:?}", id))
    }

    /// International display form, e.g. `+254 712 345678`.
    pub fn international(&self) -> String {
        self.inner.format().mode(Mode::International).to_string()
    }

    /// National significant number as digits.
    pub fn national_digits(&self) -> String {
        self.national_number.to_string()
    }

    pub(crate) fn phone(&self) -> &PhoneNumber {
        &self.inner
    }
}

/// Prepend `+` when missing. Surrounding whitespace is dropped.
pub fn normalize(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.starts_with('+') {
        trimmed.to_string()
    } else {
        format!("+{}", trimmed)
    }
}

/// Parse a raw phone number string.
pub fn parse(input: &str) -> Result<ParsedNumber, NumberError> {
    if input.trim().trim_start_matches('+').trim().is_empty() {
        return Err(NumberError::Empty);
    }

    let normalized = normalize(input);
    let inner = phonenumber::parse(None, &normalized).map_err(|e| NumberError::Malformed {
        input: input.trim().to_string(),
        reason: e.to_string(),
    })?;

    let is_valid = phonenumber::is_valid(&inner);
    log::debug!(
        "parsed {} -> cc={} nsn={} valid={}",
        normalized,
        inner.code().value(),
        inner.national().value(),
        is_valid
    );

    Ok(ParsedNumber {
        country_code: inner.code().value(),
        national_number: inner.national().value(),
        is_valid,
        normalized,
        inner,
    })
}
