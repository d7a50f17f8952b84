//! CivilDateTime value object: what a `datetime-local` form field carries.

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::civil_date::{expect_separator, fixed_digits};
use super::{CivilDate, ValidationError};

/// Wall-clock date and time with minute precision and no zone.
///
/// Wire format is exactly `YYYY-MM-DDTHH:mm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CivilDateTime {
    date: CivilDate,
    hour: u32,
    minute: u32,
}

impl CivilDateTime {
    /// Creates a civil date-time.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` for an hour outside `0..=23`
    /// or a minute outside `0..=59`.
    pub fn new(date: CivilDate, hour: u32, minute: u32) -> Result<Self, ValidationError> {
        if hour > 23 {
            return Err(ValidationError::out_of_range("hour", 0, 23, hour as i32));
        }
        if minute > 59 {
            return Err(ValidationError::out_of_range("minute", 0, 59, minute as i32));
        }
        Ok(Self { date, hour, minute })
    }

    /// Civil midnight at the start of `date`.
    pub fn at_midnight(date: CivilDate) -> Self {
        Self {
            date,
            hour: 0,
            minute: 0,
        }
    }

    /// Truncates a chrono naive date-time to minute precision.
    pub fn from_naive(naive: NaiveDateTime) -> Self {
        Self {
            date: CivilDate::from_naive(naive.date()),
            hour: naive.hour(),
            minute: naive.minute(),
        }
    }

    pub fn date(&self) -> CivilDate {
        self.date
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Returns the fields as a chrono naive date-time (seconds are zero).
    pub fn to_naive(&self) -> NaiveDateTime {
        let time = NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or_default();
        self.date.as_naive().and_time(time)
    }
}

impl FromStr for CivilDateTime {
    type Err = ValidationError;

    /// Parses strictly `YYYY-MM-DDTHH:mm`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ValidationError::empty_field("date_time"));
        }
        if s.len() != 16 {
            return Err(ValidationError::invalid_format(
                "date_time",
                "expected YYYY-MM-DDTHH:mm",
            ));
        }
        let date_part = s
            .get(0..10)
            .ok_or_else(|| ValidationError::invalid_format("date_time", "value is truncated"))?;
        let date: CivilDate = date_part.parse()?;
        expect_separator(s, 10, b'T', "date_time")?;
        let hour = fixed_digits(s, 11, 2, "date_time")?;
        expect_separator(s, 13, b':', "date_time")?;
        let minute = fixed_digits(s, 14, 2, "date_time")?;

        Self::new(date, hour, minute)
    }
}

impl TryFrom<String> for CivilDateTime {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CivilDateTime> for String {
    fn from(value: CivilDateTime) -> Self {
        value.to_string()
    }
}

impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{:02}:{:02}", self.date, self.hour, self.minute)
    }
}
