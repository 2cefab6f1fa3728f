//! # datesift
//!
//! Best-effort extraction of a single calendar date from a line of noisy
//! free text, such as a clinical note.
//!
//! A line is cleaned of noise punctuation, swept with an ordered catalog of
//! date patterns (numeric, month-name, fuzzy and bare-year shapes), and the
//! most plausible candidate is normalized into a calendar date. Unparseable
//! lines come back as typed errors, never panics, so a batch caller can
//! tally failures and keep going.
//!
//! ## Example
//!
//! ```
//! use datesift::find_date;
//!
//! let date = find_date("03/25/93 Total time of visit (in minutes):").unwrap();
//! assert_eq!((date.year(), date.month(), date.day()), (1993, 3, 25));
//!
//! let date = find_date("September 1995 - first hospitalization").unwrap();
//! assert_eq!((date.year(), date.month(), date.day()), (1995, 9, 1));
//! ```

mod catalog;
mod error;
mod extract;
mod lexicon;
mod normalize;
mod rank;

pub use catalog::PatternKind;
pub use error::{DateError, Result};
pub use extract::RawCandidate;
pub use normalize::NormalizedFields;

use chrono::{Datelike, NaiveDate};
use extract::{clean_line, extract_candidates};
use normalize::normalize;
use rank::select_best;
use std::fmt;

/// The resolved date for one input line: a validated calendar date plus the
/// text the winning pattern matched.
///
/// Created once per line and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDate {
    date: NaiveDate,
    matched_text: String,
}

impl ResolvedDate {
    fn new(fields: NormalizedFields, matched_text: &str) -> Result<Self> {
        let NormalizedFields { year, month, day } = fields;
        let date = NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
            .ok_or(DateError::InvalidCalendarDate { year, month, day })?;
        Ok(Self {
            date,
            matched_text: matched_text.to_string(),
        })
    }

    /// Four-digit year.
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Month number, 1-12.
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Day of month, 1-based.
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// The resolved calendar date.
    pub fn calendar_date(&self) -> NaiveDate {
        self.date
    }

    /// The substring of the cleaned line that the winning pattern matched.
    pub fn matched_text(&self) -> &str {
        &self.matched_text
    }
}

impl fmt::Display for ResolvedDate {
    /// American `M/D/YYYY` rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.date.month(),
            self.date.day(),
            self.date.year()
        )
    }
}

/// Find the single most plausible date in a line of free text.
///
/// The line is cleaned (periods, commas, colons and semicolons stripped,
/// whitespace collapsed), every catalog pattern is run against it, and when
/// more than one candidate survives the most date-shaped one wins. Missing
/// components fall back to fixed defaults: no day means the 1st of the
/// month, no month means January, and a two-digit year lands in the 1900s.
///
/// The result is a pure function of the input — re-running on the same line
/// always returns the same date or the same error.
///
/// # Arguments
///
/// * `raw_line` - One line of text that may contain a date somewhere in it
///
/// # Returns
///
/// * `Ok(ResolvedDate)` - The winning candidate as a calendar date
/// * `Err(DateError)` - Why no date could be resolved from this line
///
/// # Example
///
/// ```
/// use datesift::{find_date, DateError};
///
/// let date = find_date("August 12 2004 - diagnosed with Parkinson's").unwrap();
/// assert_eq!((date.year(), date.month(), date.day()), (2004, 8, 12));
///
/// let err = find_date("random text with no date at all").unwrap_err();
/// assert_eq!(err, DateError::NoDateFound);
/// ```
pub fn find_date(raw_line: &str) -> Result<ResolvedDate> {
    let cleaned = clean_line(raw_line);
    let candidates = extract_candidates(&cleaned);

    let winner = match candidates.as_slice() {
        [] => return Err(DateError::NoDateFound),
        [only] => only,
        many => select_best(many).ok_or(DateError::NoDateFound)?,
    };

    let fields = normalize(winner)?;
    ResolvedDate::new(fields, &winner.matched_text)
}
