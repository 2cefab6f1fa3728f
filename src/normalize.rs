//! Field normalizers: captured month, day and year text into validated
//! numeric values
//!
//! Month resolves first because the day limit depends on it; year is
//! independent of both. Each normalizer is a pure function of its inputs
//! with its own failure mode.

use crate::error::{DateError, Result};
use crate::extract::RawCandidate;
use crate::lexicon::{max_day, month_names, month_number};

/// Validated numeric date fields.
///
/// `month` is always 1-12, `day` is always within the month's limit, and
/// `year` is always four digits — two-digit input years land in the 1900s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedFields {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

/// Normalize all fields of one candidate.
pub fn normalize(candidate: &RawCandidate) -> Result<NormalizedFields> {
    let month = normalize_month(candidate.month_text.as_deref())?;
    let day = normalize_day(candidate.day_text.as_deref(), month)?;
    let year = normalize_year(&candidate.year_text)?;
    Ok(NormalizedFields { year, month, day })
}

/// Resolve captured month text to a month number 1-12.
///
/// An absent month defaults to January. Numeric text must be in range.
/// Alphabetic text is looked up in the lexicon verbatim, then by substring
/// search across all known names, so a stray character picked up by a fuzzy
/// pattern (or a typo like "Decemeber") does not discard the match. Mixed
/// alphanumeric text gets one retry with its leading digits stripped.
pub fn normalize_month(text: Option<&str>) -> Result<u8> {
    let Some(text) = text else {
        return Ok(1);
    };
    let invalid = || DateError::InvalidMonth(text.to_string());

    if text.chars().all(|c| c.is_ascii_digit()) {
        let value: u8 = text.parse().map_err(|_| invalid())?;
        return if (1..=12).contains(&value) {
            Ok(value)
        } else {
            Err(invalid())
        };
    }

    if text.chars().all(char::is_alphabetic) {
        return resolve_name(text).ok_or_else(invalid);
    }

    // Mixed alphanumeric: strip leading digits and retry the name path once.
    let stripped = text.trim_start_matches(|c: char| c.is_ascii_digit());
    if !stripped.is_empty() && stripped.chars().all(char::is_alphabetic) {
        return resolve_name(stripped).ok_or_else(invalid);
    }

    Err(invalid())
}

/// Verbatim lexicon lookup, then first known name contained in the text.
fn resolve_name(text: &str) -> Option<u8> {
    if let Some(month) = month_number(text) {
        return Some(month);
    }
    let lower = text.to_lowercase();
    month_names()
        .find(|name| lower.contains(name))
        .and_then(month_number)
}

/// Resolve captured day text against the month's day limit.
///
/// An absent day defaults to the 1st, so month/year-only dates resolve to
/// the first of the month. The month must already be normalized.
pub fn normalize_day(text: Option<&str>, month: u8) -> Result<u8> {
    let Some(text) = text else {
        return Ok(1);
    };
    let invalid = || DateError::InvalidDay {
        day: text.to_string(),
        month,
    };

    if !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let value: u8 = text.parse().map_err(|_| invalid())?;
    let limit = max_day(month).ok_or_else(invalid)?;
    if (1..=limit).contains(&value) {
        Ok(value)
    } else {
        Err(invalid())
    }
}

/// Resolve captured year text to a four-digit year.
///
/// Two-digit years are assumed to be in the 20th century: "93" is 1993 and
/// "25" is 1925, never 2025. Anything other than an all-digit 2- or
/// 4-character field is rejected.
pub fn normalize_year(text: &str) -> Result<u16> {
    let invalid = || DateError::InvalidYear(text.to_string());

    if !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    match text.len() {
        2 => {
            let value: u16 = text.parse().map_err(|_| invalid())?;
            Ok(1900 + value)
        }
        4 => text.parse().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}
