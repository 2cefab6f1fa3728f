//! Month name lookup and per-month day limits

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// Short month names (case-insensitive matching)
pub const MONTH_NAMES_SHORT: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun",
    "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Full month names (case-insensitive matching)
pub const MONTH_NAMES_FULL: [&str; 12] = [
    "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december",
];

/// Highest valid day per month, indexed by month number minus one.
/// February is pinned to 29 for every year; leap years are not modelled.
const MONTH_MAX_DAYS: [u8; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

static MONTH_NUMBERS: Lazy<FxHashMap<&'static str, u8>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    for (idx, name) in MONTH_NAMES_SHORT.iter().enumerate() {
        map.insert(*name, idx as u8 + 1);
    }
    for (idx, name) in MONTH_NAMES_FULL.iter().enumerate() {
        map.insert(*name, idx as u8 + 1);
    }
    map
});

/// Look up a month name (short or full, any case) and return its number 1-12.
pub fn month_number(name: &str) -> Option<u8> {
    MONTH_NUMBERS.get(name.to_lowercase().as_str()).copied()
}

/// Iterate every known month name, short names before full names.
///
/// The iteration order is fixed; pattern generation and substring recovery
/// both depend on it being stable.
pub fn month_names() -> impl Iterator<Item = &'static str> {
    MONTH_NAMES_SHORT.iter().chain(MONTH_NAMES_FULL.iter()).copied()
}

/// Highest valid day number for the given month, or `None` outside 1-12.
pub fn max_day(month: u8) -> Option<u8> {
    (month as usize)
        .checked_sub(1)
        .and_then(|idx| MONTH_MAX_DAYS.get(idx))
        .copied()
}
