//! CivilDateCodec - Day-granularity conversions.
//!
//! A stored day is the instant of civil midnight in the company zone.
//! Reading it back projects through the same zone, which is what keeps a
//! date from drifting by one when the server runs in UTC.

use super::projector::CivilClockProjector;
use super::solver::InstantSolver;
use crate::domain::foundation::{CivilDate, CivilDateTime, DomainError, Timestamp, TimezoneId};
use crate::ports::Clock;

/// Converts between `CivilDate` and instants for a zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CivilDateCodec {
    solver: InstantSolver,
}

impl CivilDateCodec {
    pub fn new(solver: InstantSolver) -> Self {
        Self { solver }
    }

    /// Instant of civil midnight at the start of `date` in `tz`.
    pub fn encode(&self, date: CivilDate, tz: &TimezoneId) -> Timestamp {
        self.solver.solve(&CivilDateTime::at_midnight(date), tz)
    }

    /// Civil day on which `instant` falls in `tz`.
    pub fn decode(&self, instant: &Timestamp, tz: &TimezoneId) -> CivilDate {
        CivilClockProjector::project(instant, tz).date()
    }

    /// Civil day it currently is in `tz`.
    pub fn today(&self, clock: &dyn Clock, tz: &TimezoneId) -> CivilDate {
        self.decode(&clock.now(), tz)
    }

    /// Parses a `YYYY-MM-DD` form value and encodes it.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` when `value` is empty or not a
    /// real calendar date.
    pub fn encode_str(&self, value: &str, tz: &TimezoneId) -> Result<Timestamp, DomainError> {
        let date = value
            .parse::<CivilDate>()
            .map_err(|e| DomainError::invalid_input("date", value, e.to_string()))?;
        Ok(self.encode(date, tz))
    }

    /// Decodes `instant` straight to its `YYYY-MM-DD` wire form.
    pub fn decode_to_string(&self, instant: &Timestamp, tz: &TimezoneId) -> String {
        self.decode(instant, tz).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::SolverStrategy;
    use crate::domain::foundation::ErrorCode;
    use proptest::prelude::*;

    struct StoppedClock(Timestamp);

    impl Clock for StoppedClock {
        fn now(&self) -> Timestamp {
            self.0
        }
    }

    fn date(s: &str) -> CivilDate {
        s.parse().unwrap()
    }

    fn instant(rfc3339: &str) -> Timestamp {
        Timestamp::from_datetime(
            chrono::DateTime::parse_from_rfc3339(rfc3339)
                .unwrap()
                .with_timezone(&chrono::Utc),
        )
    }

    #[test]
    fn encode_returns_midnight_in_zone() {
        let codec = CivilDateCodec::default();
        assert_eq!(
            codec.encode(date("2025-01-15"), &TimezoneId::denver()),
            instant("2025-01-15T07:00:00Z")
        );
        assert_eq!(
            codec.encode(date("2025-07-15"), &TimezoneId::denver()),
            instant("2025-07-15T06:00:00Z")
        );
    }

    #[test]
    fn decode_uses_zone_not_utc() {
        let codec = CivilDateCodec::default();
        // 03:00 UTC on the 11th is still the evening of the 10th in Denver.
        assert_eq!(
            codec.decode(&instant("2025-06-11T03:00:00Z"), &TimezoneId::denver()),
            date("2025-06-10")
        );
    }

    #[test]
    fn today_reads_clock_in_zone() {
        let codec = CivilDateCodec::default();
        let clock = StoppedClock(instant("2025-06-11T03:00:00Z"));
        assert_eq!(codec.today(&clock, &TimezoneId::denver()), date("2025-06-10"));

        let tokyo = TimezoneId::parse("Asia/Tokyo").unwrap();
        assert_eq!(codec.today(&clock, &tokyo), date("2025-06-11"));
    }

    #[test]
    fn encode_str_rejects_malformed_values() {
        let codec = CivilDateCodec::default();
        for value in ["", "2025-6-1", "2025-02-30", "tomorrow"] {
            let err = codec.encode_str(value, &TimezoneId::denver()).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidInput, "{}", value);
        }
    }

    #[test]
    fn encode_str_accepts_wire_format() {
        let codec = CivilDateCodec::default();
        let at = codec.encode_str("2025-01-15", &TimezoneId::denver()).unwrap();
        assert_eq!(codec.decode_to_string(&at, &TimezoneId::denver()), "2025-01-15");
    }

    #[test]
    fn midnight_gap_still_decodes_to_same_day() {
        // Santiago springs forward at midnight: 00:00 on 2024-09-08 never happens.
        let codec = CivilDateCodec::default();
        let santiago = TimezoneId::parse("America/Santiago").unwrap();
        let day = date("2024-09-08");
        assert_eq!(codec.decode(&codec.encode(day, &santiago), &santiago), day);
    }

    const ZONES: &[&str] = &[
        "America/Denver",
        "America/New_York",
        "America/Santiago",
        "Europe/London",
        "Asia/Kolkata",
        "Asia/Kathmandu",
        "Australia/Lord_Howe",
        "Pacific/Auckland",
        "UTC",
    ];

    proptest! {
        #[test]
        fn decode_inverts_encode(
            year in 1971i32..2100,
            month in 1u32..=12,
            day in 1u32..=28,
            zone in prop::sample::select(ZONES),
        ) {
            let codec = CivilDateCodec::default();
            let tz = TimezoneId::parse(zone).unwrap();
            let d = CivilDate::new(year, month, day).unwrap();
            prop_assert_eq!(codec.decode(&codec.encode(d, &tz), &tz), d);
        }

        #[test]
        fn offset_search_round_trips_in_denver(
            year in 1971i32..2100,
            month in 1u32..=12,
            day in 1u32..=28,
        ) {
            let codec = CivilDateCodec::new(
                InstantSolver::default().with_strategy(SolverStrategy::OffsetSearch),
            );
            let tz = TimezoneId::denver();
            let d = CivilDate::new(year, month, day).unwrap();
            prop_assert_eq!(codec.decode(&codec.encode(d, &tz), &tz), d);
        }
    }
}
