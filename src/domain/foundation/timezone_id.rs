//! TimezoneId value object naming an IANA zone.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Zone used when nothing else is configured.
pub const DEFAULT_TIMEZONE: &str = "America/Denver";

/// Validated IANA time zone identifier (e.g. `America/Denver`).
///
/// Construction resolves the name against the bundled tzdata, so every
/// `TimezoneId` is usable for projection without further checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimezoneId(Tz);

impl TimezoneId {
    /// Parses an IANA identifier.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` for blank input and
    /// `ValidationError::InvalidFormat` for names the tz database does not know.
    pub fn parse(name: &str) -> Result<Self, ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::empty_field("timezone"));
        }
        name.parse::<Tz>()
            .map(Self)
            .map_err(|_| ValidationError::invalid_format("timezone", format!("unknown IANA zone '{}'", name)))
    }

    /// The stock `America/Denver` zone.
    pub fn denver() -> Self {
        Self(Tz::America__Denver)
    }

    /// Returns the canonical name.
    pub fn as_str(&self) -> &'static str {
        self.0.name()
    }

    /// Returns the chrono-tz zone backing this identifier.
    pub fn tz(&self) -> Tz {
        self.0
    }
}

impl Default for TimezoneId {
    fn default() -> Self {
        Self::denver()
    }
}

impl FromStr for TimezoneId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimezoneId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TimezoneId> for String {
    fn from(value: TimezoneId) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for TimezoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
