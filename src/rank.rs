//! Candidate ranking for lines where more than one pattern fired
//!
//! Patterns deliberately overlap and pick up noise (numbers in unrelated
//! contexts, stray words before a year), so when a line yields several
//! candidates each one is scored for how date-shaped it is without fully
//! resolving it. The score ladder is 0-8: an implausible year zeroes the
//! candidate outright, a resolvable month adds 3, an in-range day adds 4.

use crate::extract::RawCandidate;
use crate::normalize::{normalize_day, normalize_month};

/// Score one candidate on the 0-8 plausibility scale.
///
/// Absent fields count as valid: a missing month or day falls back to its
/// default and still earns the points. Field checks reuse the normalizers
/// so scoring and resolution can never disagree about validity.
pub fn score_candidate(candidate: &RawCandidate) -> u8 {
    if !year_plausible(&candidate.year_text) {
        return 0;
    }
    let mut score = 1;

    let Ok(month) = normalize_month(candidate.month_text.as_deref()) else {
        return score;
    };
    score += 3;

    if normalize_day(candidate.day_text.as_deref(), month).is_ok() {
        score += 4;
    }
    score
}

/// Any 2-digit year is plausible; a 4-digit year must fall inside the same
/// 1900-2049 window the bare-year pattern accepts.
fn year_plausible(text: &str) -> bool {
    if !text.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    match text.len() {
        2 => true,
        4 => text
            .parse::<u16>()
            .is_ok_and(|year| (1900..=2049).contains(&year)),
        _ => false,
    }
}

/// Pick the winning candidate: highest score, first-encountered on ties.
///
/// The strictly-greater comparison keeps discovery order as the tie-break,
/// so repeated runs over the same line always pick the same winner.
pub fn select_best(candidates: &[RawCandidate]) -> Option<&RawCandidate> {
    let (mut best, rest) = candidates.split_first()?;
    let mut best_score = score_candidate(best);

    for candidate in rest {
        let score = score_candidate(candidate);
        if score > best_score {
            best = candidate;
            best_score = score;
        }
    }

    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PatternKind;

    fn candidate(
        month: Option<&str>,
        day: Option<&str>,
        year: &str,
    ) -> RawCandidate {
        RawCandidate {
            kind: PatternKind::NumericSlash,
            matched_text: String::new(),
            month_text: month.map(str::to_string),
            day_text: day.map(str::to_string),
            year_text: year.to_string(),
        }
    }

    #[test]
    fn test_fully_valid_candidate_scores_eight() {
        assert_eq!(score_candidate(&candidate(Some("3"), Some("25"), "1993")), 8);
    }

    #[test]
    fn test_absent_fields_count_as_valid() {
        assert_eq!(score_candidate(&candidate(None, None, "2004")), 8);
        assert_eq!(score_candidate(&candidate(Some("sep"), None, "95")), 8);
    }

    #[test]
    fn test_bad_year_zeroes_the_score() {
        assert_eq!(score_candidate(&candidate(Some("3"), Some("25"), "300")), 0);
        assert_eq!(score_candidate(&candidate(Some("3"), Some("25"), "2077")), 0);
    }

    #[test]
    fn test_bad_month_stops_at_one() {
        assert_eq!(score_candidate(&candidate(Some("30"), Some("5"), "2001")), 1);
        assert_eq!(
            score_candidate(&candidate(Some("Metformin"), None, "1998")),
            1
        );
    }

    #[test]
    fn test_bad_day_loses_four_points() {
        assert_eq!(score_candidate(&candidate(Some("2"), Some("30"), "2001")), 4);
    }

    #[test]
    fn test_select_best_prefers_higher_score() {
        let noise = candidate(Some("QTc"), None, "1998");
        let real = candidate(Some("4"), Some("13"), "82");
        let candidates = [noise, real.clone()];
        let picked = select_best(&candidates).unwrap();
        assert_eq!(picked, &real);
    }

    #[test]
    fn test_select_best_keeps_first_on_tie() {
        let first = candidate(Some("5"), Some("18"), "78");
        let second = candidate(None, None, "2004");
        let candidates = [first.clone(), second];
        let picked = select_best(&candidates).unwrap();
        assert_eq!(picked, &first);
    }

    #[test]
    fn test_select_best_empty() {
        assert!(select_best(&[]).is_none());
    }
}
