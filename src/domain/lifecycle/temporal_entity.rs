//! TemporalEntity - The date-bearing view of a menu special, event or
//! announcement that classification works on.

use serde::{Deserialize, Serialize};

use crate::domain::clock::CivilDateCodec;
use crate::domain::foundation::{CivilDate, Timestamp, TimezoneId, ValidationError};

/// A day-granularity field, either typed as a civil date or stored as the
/// instant of civil midnight in the company zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DayValue {
    Civil(CivilDate),
    Stored(Timestamp),
}

impl DayValue {
    /// Civil date this value denotes in `tz`.
    pub fn civil_date(&self, dates: &CivilDateCodec, tz: &TimezoneId) -> CivilDate {
        match self {
            DayValue::Civil(date) => *date,
            DayValue::Stored(instant) => dates.decode(instant, tz),
        }
    }
}

impl From<CivilDate> for DayValue {
    fn from(value: CivilDate) -> Self {
        DayValue::Civil(value)
    }
}

impl From<Timestamp> for DayValue {
    fn from(value: Timestamp) -> Self {
        DayValue::Stored(value)
    }
}

/// Optional lifecycle fields exposed by a domain record.
///
/// Every field is optional; rules only fire for the fields that are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporalEntity {
    pub is_active: Option<bool>,
    pub is_available: Option<bool>,
    pub is_published: Option<bool>,
    pub publish_at: Option<Timestamp>,
    pub expires_at: Option<Timestamp>,
    pub start_date_time: Option<Timestamp>,
    pub end_date_time: Option<Timestamp>,
    pub start_date: Option<DayValue>,
    pub end_date: Option<DayValue>,
}

impl TemporalEntity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn with_available(mut self, is_available: bool) -> Self {
        self.is_available = Some(is_available);
        self
    }

    pub fn with_published(mut self, is_published: bool) -> Self {
        self.is_published = Some(is_published);
        self
    }

    pub fn with_publish_at(mut self, at: Timestamp) -> Self {
        self.publish_at = Some(at);
        self
    }

    pub fn with_expires_at(mut self, at: Timestamp) -> Self {
        self.expires_at = Some(at);
        self
    }

    /// Sets a time-bearing window; `end` of `None` means open-ended.
    pub fn with_date_times(mut self, start: Timestamp, end: Option<Timestamp>) -> Self {
        self.start_date_time = Some(start);
        self.end_date_time = end;
        self
    }

    /// Sets a day-granularity window.
    pub fn with_dates(mut self, start: impl Into<DayValue>, end: Option<DayValue>) -> Self {
        self.start_date = Some(start.into());
        self.end_date = end;
        self
    }

    /// Checks the ordering contract callers enforce before classification.
    ///
    /// An end day before the start day, or an end instant at or before the
    /// start instant, is rejected. Events running past midnight are fine:
    /// their instants still increase.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OrderingViolation` naming the offending pair.
    pub fn validate_ordering(
        &self,
        dates: &CivilDateCodec,
        tz: &TimezoneId,
    ) -> Result<(), ValidationError> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end.civil_date(dates, tz) < start.civil_date(dates, tz) {
                return Err(ValidationError::ordering_violation("startDate", "endDate"));
            }
        }
        if let (Some(start), Some(end)) = (self.start_date_time, self.end_date_time) {
            if end <= start {
                return Err(ValidationError::ordering_violation(
                    "startDateTime",
                    "endDateTime",
                ));
            }
        }
        Ok(())
    }
}
