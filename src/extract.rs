//! Candidate extraction: sweep the pattern catalog over a cleaned line

use crate::catalog::{PatternKind, CATALOG};
use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

/// Candidate storage with inline capacity for the common few-match case
pub type CandidateList = SmallVec<[RawCandidate; 4]>;

/// One raw pattern match: the captured field texts before any validation.
///
/// Candidates are ephemeral — they live only inside a single extraction call
/// and are consumed immediately by ranking and normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCandidate {
    /// Surface form that produced this candidate
    pub kind: PatternKind,
    /// Full span of cleaned text claimed by the match, kept for diagnostics
    pub matched_text: String,
    /// Captured month field, if the shape has a month slot
    pub month_text: Option<String>,
    /// Captured day field, if the shape has a day slot
    pub day_text: Option<String>,
    /// Captured year field; every shape captures a year
    pub year_text: String,
}

static NOISE_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.,;:]").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// Strip periods, commas, colons and semicolons, and collapse whitespace
/// runs to a single space.
///
/// The catalog patterns assume this pre-pass has run: "March 25, 2009." and
/// "March 25 2009" must look identical to them.
pub fn clean_line(raw: &str) -> String {
    let stripped = NOISE_PUNCT.replace_all(raw, "");
    WHITESPACE_RUN.replace_all(&stripped, " ").into_owned()
}

/// Run every catalog pattern over a cleaned line and collect candidates.
///
/// Patterns run in catalog priority order and all non-overlapping matches of
/// each pattern are considered, so several patterns can contribute candidates
/// from different parts of the line. A span of text belongs to the first
/// pattern that matches it: later, looser matches overlapping a claimed span
/// are dropped. Candidate order (pattern order, then match position) is the
/// discovery order the ranker uses for tie-breaks.
pub fn extract_candidates(cleaned: &str) -> CandidateList {
    let mut candidates = CandidateList::new();
    let mut claimed: Vec<(usize, usize)> = Vec::new();

    for pattern in CATALOG.iter() {
        for caps in pattern.regex.captures_iter(cleaned) {
            let (Some(whole), Some(year)) = (caps.get(0), caps.name("year")) else {
                continue;
            };
            if overlaps(&claimed, whole.start(), whole.end()) {
                continue;
            }
            claimed.push((whole.start(), whole.end()));
            candidates.push(RawCandidate {
                kind: pattern.kind,
                matched_text: whole.as_str().to_string(),
                month_text: caps.name("month").map(|m| m.as_str().to_string()),
                day_text: caps.name("day").map(|d| d.as_str().to_string()),
                year_text: year.as_str().to_string(),
            });
        }
    }

    candidates
}

fn overlaps(claimed: &[(usize, usize)], start: usize, end: usize) -> bool {
    claimed.iter().any(|&(s, e)| start < e && end > s)
}
