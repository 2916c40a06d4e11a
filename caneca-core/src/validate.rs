//! Pure format validators for the textual conventions callers must
//! satisfy before constructing core objects.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime, ParseError as ChronoParseError};
use regex::Regex;

/// Format for shift dates, e.g. `2024-03-18`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format for shift start and end times, e.g. `06:30`.
pub const TIME_FORMAT: &str = "%H:%M";

static PLATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Z]{3}\s\d{3}|[A-Z]{2}\s\d{4})$").expect("plate pattern is well formed")
});

#[derive(thiserror::Error, Debug)]
/// Recoverable format errors; the caller is expected to re-prompt and
/// retry.
pub enum ValidateError {
    /// A date or time string did not match the expected format.
    #[error("Parse error: {0}")]
    Parse(#[from] ChronoParseError),
}

/// Check a truck plate against the two accepted formats: three uppercase
/// letters, a separator, and three digits, or two uppercase letters, a
/// separator, and four digits.
///
/// The pattern match is confirmed by a letter/digit count; both checks
/// must agree for the plate to be accepted.
#[must_use]
pub fn is_valid_plate(plate: &str) -> bool {
    if !PLATE_PATTERN.is_match(plate) {
        return false;
    }
    let letters = plate.chars().filter(char::is_ascii_uppercase).count();
    let digits = plate.chars().filter(char::is_ascii_digit).count();
    matches!((letters, digits), (2, 4) | (3, 3))
}

/// Check that a person identifier is exactly ten ASCII digits.
#[must_use]
pub fn is_valid_person_id(id: &str) -> bool {
    id.len() == 10 && id.chars().all(|character| character.is_ascii_digit())
}

/// Parse a shift date in [`DATE_FORMAT`].
///
/// # Errors
///
/// Returns [`ValidateError::Parse`] when the input does not match the
/// format.
pub fn parse_shift_date(input: &str) -> Result<NaiveDate, ValidateError> {
    Ok(NaiveDate::parse_from_str(input, DATE_FORMAT)?)
}

/// Parse a shift time in [`TIME_FORMAT`].
///
/// # Errors
///
/// Returns [`ValidateError::Parse`] when the input does not match the
/// format.
pub fn parse_shift_time(input: &str) -> Result<NaiveTime, ValidateError> {
    Ok(NaiveTime::parse_from_str(input, TIME_FORMAT)?)
}
