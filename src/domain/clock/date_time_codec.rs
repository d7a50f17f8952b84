//! CivilDateTimeCodec - Minute-granularity conversions for event fields.

use super::projector::CivilClockProjector;
use super::solver::InstantSolver;
use crate::domain::foundation::{CivilDateTime, DomainError, Timestamp, TimezoneId, ValidationError};

/// Converts between `CivilDateTime` and instants for a zone, and between
/// `CivilDateTime` and the `YYYY-MM-DDTHH:mm` form value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CivilDateTimeCodec {
    solver: InstantSolver,
}

impl CivilDateTimeCodec {
    pub fn new(solver: InstantSolver) -> Self {
        Self { solver }
    }

    /// Instant at which `tz`'s wall clock reads `value`.
    pub fn encode(&self, value: &CivilDateTime, tz: &TimezoneId) -> Timestamp {
        self.solver.solve(value, tz)
    }

    /// Wall-clock reading in `tz` at `instant`, truncated to the minute.
    pub fn decode(&self, instant: &Timestamp, tz: &TimezoneId) -> CivilDateTime {
        CivilClockProjector::project(instant, tz).date_time
    }

    /// Parses a `YYYY-MM-DDTHH:mm` form value. No zone is involved.
    pub fn parse_form_value(value: &str) -> Result<CivilDateTime, ValidationError> {
        value.parse()
    }

    /// Formats back to the exact form value shape.
    pub fn format_form_value(value: &CivilDateTime) -> String {
        value.to_string()
    }

    /// Parses and encodes a form value in one step.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` for an empty or malformed value.
    pub fn encode_form_value(&self, value: &str, tz: &TimezoneId) -> Result<Timestamp, DomainError> {
        let civil = Self::parse_form_value(value)
            .map_err(|e| DomainError::invalid_input("date_time", value, e.to_string()))?;
        Ok(self.encode(&civil, tz))
    }

    /// Decodes an instant straight to the form value shape.
    pub fn decode_form_value(&self, instant: &Timestamp, tz: &TimezoneId) -> String {
        Self::format_form_value(&self.decode(instant, tz))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::SolverStrategy;
    use crate::domain::foundation::ErrorCode;

    fn instant(rfc3339: &str) -> Timestamp {
        Timestamp::from_datetime(
            chrono::DateTime::parse_from_rfc3339(rfc3339)
                .unwrap()
                .with_timezone(&chrono::Utc),
        )
    }

    #[test]
    fn encode_form_value_applies_zone_offset() {
        let codec = CivilDateTimeCodec::default();
        let at = codec
            .encode_form_value("2025-06-01T18:30", &TimezoneId::denver())
            .unwrap();
        assert_eq!(at, instant("2025-06-02T00:30:00Z"));
    }

    #[test]
    fn decode_form_value_restores_wall_clock() {
        let codec = CivilDateTimeCodec::default();
        assert_eq!(
            codec.decode_form_value(&instant("2025-06-02T00:30:00Z"), &TimezoneId::denver()),
            "2025-06-01T18:30"
        );
    }

    #[test]
    fn decode_truncates_seconds() {
        let codec = CivilDateTimeCodec::default();
        let reading = codec.decode(&instant("2025-01-15T19:00:59Z"), &TimezoneId::denver());
        assert_eq!(reading.to_string(), "2025-01-15T12:00");
    }

    #[test]
    fn form_value_round_trips_without_zone() {
        let parsed = CivilDateTimeCodec::parse_form_value("2025-12-31T23:59").unwrap();
        assert_eq!(CivilDateTimeCodec::format_form_value(&parsed), "2025-12-31T23:59");
    }

    #[test]
    fn encode_form_value_rejects_malformed_input() {
        let codec = CivilDateTimeCodec::default();
        for value in ["", "2025-06-01", "2025-06-01T18:30:00", "2025-06-01T25:00"] {
            let err = codec
                .encode_form_value(value, &TimezoneId::denver())
                .unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidInput, "{}", value);
        }
    }

    #[test]
    fn round_trip_holds_outside_transitions() {
        let tz = TimezoneId::denver();
        for codec in [
            CivilDateTimeCodec::default(),
            CivilDateTimeCodec::new(InstantSolver::default().with_strategy(SolverStrategy::OffsetSearch)),
        ] {
            for value in ["2025-01-15T12:00", "2025-06-10T22:00", "2025-06-11T02:00", "2025-11-02T03:15"] {
                let civil = CivilDateTimeCodec::parse_form_value(value).unwrap();
                assert_eq!(codec.decode(&codec.encode(&civil, &tz), &tz), civil, "{}", value);
            }
        }
    }

    #[test]
    fn cross_midnight_event_keeps_instant_order() {
        let codec = CivilDateTimeCodec::default();
        let tz = TimezoneId::denver();
        let start = codec.encode_form_value("2025-06-10T22:00", &tz).unwrap();
        let end = codec.encode_form_value("2025-06-11T02:00", &tz).unwrap();
        assert!(start.is_before(&end));
        assert_eq!(end.duration_since(&start), chrono::Duration::hours(4));
    }
}
