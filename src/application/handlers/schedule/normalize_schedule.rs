//! NormalizeScheduleHandler - Turns schedule form fields into instants.
//!
//! Form fields arrive as civil strings with no offset. They are read in the
//! company zone, and the ordering contract is checked here, before anything
//! is stored or classified.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::handlers::timezone::TimezoneResolver;
use crate::domain::clock::{CivilDateCodec, CivilDateTimeCodec};
use crate::domain::foundation::{DomainError, Timestamp, TimezoneId};
use crate::domain::lifecycle::{DayValue, TemporalEntity};

/// Command carrying raw schedule form values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NormalizeScheduleCommand {
    /// Time-bearing event; values are `YYYY-MM-DDTHH:mm`.
    Event { start: String, end: Option<String> },
    /// Day-granularity special; values are `YYYY-MM-DD`.
    DatedSpecial {
        start_date: String,
        end_date: Option<String>,
    },
}

/// Storable instants for a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NormalizedSchedule {
    Event {
        start: Timestamp,
        end: Option<Timestamp>,
    },
    /// Each day is stored as civil midnight in the zone.
    DatedSpecial {
        start_date: Timestamp,
        end_date: Option<Timestamp>,
    },
}

/// Result of successful normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NormalizeScheduleResult {
    pub timezone: TimezoneId,
    pub schedule: NormalizedSchedule,
}

/// Handler for schedule normalization.
pub struct NormalizeScheduleHandler {
    timezones: Arc<TimezoneResolver>,
    dates: CivilDateCodec,
    date_times: CivilDateTimeCodec,
}

impl NormalizeScheduleHandler {
    pub fn new(
        timezones: Arc<TimezoneResolver>,
        dates: CivilDateCodec,
        date_times: CivilDateTimeCodec,
    ) -> Self {
        Self {
            timezones,
            dates,
            date_times,
        }
    }

    /// # Errors
    ///
    /// - `ErrorCode::InvalidInput` when a value is empty or malformed
    /// - `ErrorCode::ValidationFailed` when the end precedes the start
    pub async fn handle(
        &self,
        cmd: NormalizeScheduleCommand,
    ) -> Result<NormalizeScheduleResult, DomainError> {
        let timezone = self.timezones.resolve().await;

        let (schedule, entity) = match cmd {
            NormalizeScheduleCommand::Event { start, end } => {
                let start = self
                    .date_times
                    .encode_form_value(&start, &timezone)
                    .map_err(|e| e.with_detail("field", "start"))?;
                let end = optional(end)
                    .map(|value| {
                        self.date_times
                            .encode_form_value(&value, &timezone)
                            .map_err(|e| e.with_detail("field", "end"))
                    })
                    .transpose()?;
                (
                    NormalizedSchedule::Event { start, end },
                    TemporalEntity::new().with_date_times(start, end),
                )
            }
            NormalizeScheduleCommand::DatedSpecial {
                start_date,
                end_date,
            } => {
                let start_date = self
                    .dates
                    .encode_str(&start_date, &timezone)
                    .map_err(|e| e.with_detail("field", "start_date"))?;
                let end_date = optional(end_date)
                    .map(|value| {
                        self.dates
                            .encode_str(&value, &timezone)
                            .map_err(|e| e.with_detail("field", "end_date"))
                    })
                    .transpose()?;
                (
                    NormalizedSchedule::DatedSpecial {
                        start_date,
                        end_date,
                    },
                    TemporalEntity::new().with_dates(start_date, end_date.map(DayValue::Stored)),
                )
            }
        };

        entity.validate_ordering(&self.dates, &timezone)?;

        tracing::debug!(timezone = %timezone, schedule = ?schedule, "Normalized schedule input");

        Ok(NormalizeScheduleResult { timezone, schedule })
    }
}

/// Blank optional form fields mean "not set".
fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
