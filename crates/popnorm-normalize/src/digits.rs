//! Age extraction from cell values and column names.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// First run of up to three digits, anywhere in the text.
static AGE_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{1,3}").expect("Invalid age digit regex"));

/// A digit run followed by an age unit (`23세`, `5 살`, `40yrs`), or an age
/// band ending in one (`20~24세`, `0-4세`). The first group is the lower bound.
static AGE_WITH_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)(?:\s*[~\-～–]\s*[0-9]+)?\s*(?:세|살|years?|yrs?|y)")
        .expect("Invalid age unit regex")
});

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("Invalid digit run regex"));

const MAX_AGE_DIGITS: usize = 3;

/// Folds full-width digits (`０`..`９`) to ASCII so spreadsheet exports
/// that use them still yield ages.
fn fold_digits(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_fullwidth_digit) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|ch| {
                if is_fullwidth_digit(ch) {
                    char::from_u32(ch as u32 - '０' as u32 + '0' as u32).unwrap_or(ch)
                } else {
                    ch
                }
            })
            .collect(),
    )
}

fn is_fullwidth_digit(ch: char) -> bool {
    ('０'..='９').contains(&ch)
}

/// Extracts an age from a long-shape cell: the first run of one to three
/// digits. Longer runs contribute only their first three digits.
pub fn extract_age(text: &str) -> Option<u32> {
    let folded = fold_digits(text);
    AGE_DIGITS
        .find(&folded)
        .and_then(|found| found.as_str().parse().ok())
}

/// Extracts an age from a wide-shape column name.
///
/// A digit run followed by an age unit wins, and an age band yields its
/// lower bound, matching [`extract_age`]. Otherwise the first digit run
/// is used when it is short enough to be an age. Names whose leading run is
/// a year or code (`2025년 총인구수`) carry no age.
pub fn column_age(name: &str) -> Option<u32> {
    let folded = fold_digits(name);
    let with_unit = AGE_WITH_UNIT
        .captures_iter(&folded)
        .filter_map(|caps| caps.get(1))
        .find(|digits| digits.len() <= MAX_AGE_DIGITS);
    if let Some(digits) = with_unit {
        return digits.as_str().parse().ok();
    }
    let first = DIGIT_RUN.find(&folded)?;
    if first.len() > MAX_AGE_DIGITS {
        return None;
    }
    first.as_str().parse().ok()
}
