//! Ordered catalog of date patterns
//!
//! Patterns are tried most specific first: numeric slashed/dashed forms
//! lead, month-name forms follow, and the bare-year form comes last because
//! it is the loosest and the most prone to false positives. The order is
//! part of the extraction contract, not an implementation detail — the
//! extractor lets the first pattern to match a span of text claim it.
//!
//! Month-name shapes are not hand-written: each of the 24 known names is
//! substituted into a small set of templates, so the catalog scales with the
//! lexicon rather than with maintained regex count.

use crate::lexicon::month_names;
use once_cell::sync::Lazy;
use regex::Regex;

/// Which surface form produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    /// `M/D/Y` with a 1-4 digit year capture
    NumericSlash,
    /// `M-D-Y` with a 1-4 digit year capture
    NumericDash,
    /// `D Month Y` with an exact month name
    DayNameYear,
    /// `Month D Y` with an exact month name
    NameDayYear,
    /// `Month Y` with an exact month name and no day
    NameYear,
    /// `D word Y` where the word slot over-captures noisy month text
    FuzzyDayNameYear,
    /// `word D Y` with the same loose month slot
    FuzzyNameDayYear,
    /// `word Y` with the loose month slot and a 4-digit year
    FuzzyNameYear,
    /// Numeric `M/YYYY` with no day
    NumericMonthYear,
    /// A bare 4-digit year
    BareYear,
}

/// A compiled pattern plus the surface form it recognizes.
///
/// Every regex captures a `year` group; `month` and `day` groups are only
/// present where the shape has those slots.
#[derive(Debug)]
pub struct DatePattern {
    pub kind: PatternKind,
    pub regex: Regex,
}

/// The full pattern catalog in priority order.
pub static CATALOG: Lazy<Vec<DatePattern>> = Lazy::new(build_catalog);

const YEAR_2_OR_4: &str = r"\d{4}|\d{2}";

fn compile(kind: PatternKind, pattern: &str) -> DatePattern {
    // Patterns come from fixed templates; a compile failure is a bug in the
    // catalog, not an input condition.
    let regex = Regex::new(&format!("(?i){pattern}"))
        .unwrap_or_else(|err| panic!("bad date pattern {pattern:?}: {err}"));
    DatePattern { kind, regex }
}

fn build_catalog() -> Vec<DatePattern> {
    let mut patterns = vec![
        compile(
            PatternKind::NumericSlash,
            r"\b(?P<month>\d{1,2})/(?P<day>\d{1,2})/(?P<year>\d{1,4})\b",
        ),
        compile(
            PatternKind::NumericDash,
            r"\b(?P<month>\d{1,2})-(?P<day>\d{1,2})-(?P<year>\d{1,4})\b",
        ),
    ];

    // Exact month-name shapes, one pattern per known name.
    for name in month_names() {
        patterns.push(compile(
            PatternKind::DayNameYear,
            &format!(r"\b(?P<day>\d{{1,2}})\s(?P<month>{name})\s(?P<year>{YEAR_2_OR_4})\b"),
        ));
    }
    for name in month_names() {
        patterns.push(compile(
            PatternKind::NameDayYear,
            &format!(r"\b(?P<month>{name})\s(?P<day>\d{{1,2}})\s(?P<year>{YEAR_2_OR_4})\b"),
        ));
    }
    for name in month_names() {
        patterns.push(compile(
            PatternKind::NameYear,
            &format!(r"\b(?P<month>{name})\s(?P<year>{YEAR_2_OR_4})\b"),
        ));
    }

    // Fuzzy shapes: the month slot takes any word of three or more
    // characters, so a stray character stuck to a month name (or a typo
    // inside one) still yields a candidate. The month normalizer recovers
    // the name by substring search, or rejects the candidate.
    patterns.push(compile(
        PatternKind::FuzzyDayNameYear,
        &format!(r"\b(?P<day>\d{{1,2}})\s(?P<month>\w{{3,}})\s(?P<year>{YEAR_2_OR_4})\b"),
    ));
    patterns.push(compile(
        PatternKind::FuzzyNameDayYear,
        &format!(r"\b(?P<month>\w{{3,}})\s(?P<day>\d{{1,2}})\s(?P<year>{YEAR_2_OR_4})\b"),
    ));
    patterns.push(compile(
        PatternKind::FuzzyNameYear,
        r"\b(?P<month>[[:alpha:]]\w{2,})\s(?P<year>\d{4})\b",
    ));

    // Day-less numeric month/year, then the lone-year fallback.
    patterns.push(compile(
        PatternKind::NumericMonthYear,
        r"\b(?P<month>\d{1,2})/(?P<year>\d{4})\b",
    ));
    patterns.push(compile(
        PatternKind::BareYear,
        r"\b(?P<year>19\d{2}|20[0-4]\d)\b",
    ));

    patterns
}
