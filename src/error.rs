//! Error types for datesift

use thiserror::Error;

/// Result type alias for date extraction operations
pub type Result<T> = std::result::Result<T, DateError>;

/// Failures that can occur while extracting a date from a line of text.
///
/// Every variant is an expected per-line outcome, returned to the caller
/// rather than raised; a batch caller tallies these and moves on to the
/// next line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// No pattern in the catalog matched the line
    #[error("no date found in input line")]
    NoDateFound,

    /// Captured month text could not be resolved to 1-12
    #[error("month text {0:?} could not be resolved to a month number")]
    InvalidMonth(String),

    /// Captured day text non-numeric or out of range for its month
    #[error("day text {day:?} is not a valid day of month {month}")]
    InvalidDay { day: String, month: u8 },

    /// Captured year text was not exactly 2 or 4 digits
    #[error("year text {0:?} is not a 2- or 4-digit year")]
    InvalidYear(String),

    /// Fields individually valid but they do not form a real calendar date
    #[error("{month}/{day}/{year} is not a valid calendar date")]
    InvalidCalendarDate { year: u16, month: u8, day: u8 },
}
