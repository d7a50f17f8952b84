//! CivilDate value object: a calendar day with no time of day and no zone.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Calendar day as typed into a form or stored as `YYYY-MM-DD`.
///
/// Ordering is chronological, which for four-digit years is the same as
/// comparing the wire strings lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CivilDate(NaiveDate);

impl CivilDate {
    /// Creates a civil date, rejecting days that do not exist.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` for a year outside `0..=9999`,
    /// a month outside `1..=12` or a day outside `1..=31`, and
    /// `ValidationError::InvalidFormat` for dates like February 30th.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        if !(0..=9999).contains(&year) {
            return Err(ValidationError::out_of_range("year", 0, 9999, year));
        }
        if !(1..=12).contains(&month) {
            return Err(ValidationError::out_of_range("month", 1, 12, month as i32));
        }
        if !(1..=31).contains(&day) {
            return Err(ValidationError::out_of_range("day", 1, 31, day as i32));
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "date",
                    format!("{:04}-{:02}-{:02} does not exist", year, month, day),
                )
            })
    }

    /// Wraps a chrono date.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the chrono representation.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

/// Reads a run of ASCII digits at a fixed position.
pub(super) fn fixed_digits(
    input: &str,
    start: usize,
    len: usize,
    field: &str,
) -> Result<u32, ValidationError> {
    let part = input
        .get(start..start + len)
        .ok_or_else(|| ValidationError::invalid_format(field, "value is truncated"))?;
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::invalid_format(
            field,
            format!("'{}' is not a {}-digit number", part, len),
        ));
    }
    part.parse::<u32>()
        .map_err(|e| ValidationError::invalid_format(field, e.to_string()))
}

/// Checks a separator byte at a fixed position.
pub(super) fn expect_separator(
    input: &str,
    at: usize,
    separator: u8,
    field: &str,
) -> Result<(), ValidationError> {
    match input.as_bytes().get(at) {
        Some(b) if *b == separator => Ok(()),
        _ => Err(ValidationError::invalid_format(
            field,
            format!("expected '{}' at position {}", separator as char, at + 1),
        )),
    }
}

impl FromStr for CivilDate {
    type Err = ValidationError;

    /// Parses strictly `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ValidationError::empty_field("date"));
        }
        if s.len() != 10 {
            return Err(ValidationError::invalid_format("date", "expected YYYY-MM-DD"));
        }
        let year = fixed_digits(s, 0, 4, "date")?;
        expect_separator(s, 4, b'-', "date")?;
        let month = fixed_digits(s, 5, 2, "date")?;
        expect_separator(s, 7, b'-', "date")?;
        let day = fixed_digits(s, 8, 2, "date")?;

        Self::new(year as i32, month, day)
    }
}

impl TryFrom<String> for CivilDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CivilDate> for String {
    fn from(value: CivilDate) -> Self {
        value.to_string()
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}
