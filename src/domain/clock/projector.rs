//! CivilClockProjector - Reads an instant off a wall clock in a named zone.
//!
//! This is the only place that consults tzdata. Every solver and codec
//! goes through it, so a zone's daylight-saving rules live in exactly one
//! spot (chrono-tz's bundled IANA database).

use chrono::{Offset, TimeZone, Timelike};

use crate::domain::foundation::{CivilDateTime, CivilProjection, Timestamp, TimezoneId};

/// Projects instants onto civil wall-clock fields.
///
/// Pure and deterministic for a given tzdata version.
#[derive(Debug, Clone, Copy, Default)]
pub struct CivilClockProjector;

impl CivilClockProjector {
    /// Returns the civil fields an observer in `tz` reads at `instant`.
    pub fn project(instant: &Timestamp, tz: &TimezoneId) -> CivilProjection {
        let local = instant.as_datetime().with_timezone(&tz.tz()).naive_local();
        CivilProjection {
            date_time: CivilDateTime::from_naive(local),
            second: local.second(),
        }
    }

    /// Returns the UTC offset in effect in `tz` at `instant`, in minutes.
    ///
    /// Negative west of Greenwich (`America/Denver` in winter is `-420`).
    pub fn offset_minutes(instant: &Timestamp, tz: &TimezoneId) -> i32 {
        let offset = tz
            .tz()
            .offset_from_utc_datetime(&instant.as_datetime().naive_utc())
            .fix();
        offset.local_minus_utc() / 60
    }
}
