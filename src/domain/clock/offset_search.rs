//! Bounded offset search for inverting the wall-clock projection.
//!
//! Treat the target civil fields as if they were UTC, subtract each
//! candidate UTC offset, and keep the candidates whose projection through
//! the zone reads back exactly the target. Needs nothing beyond
//! [`CivilClockProjector`], so it doubles as a cross-check of the tz
//! database path.

use super::projector::CivilClockProjector;
use super::solver::Resolution;
use crate::domain::foundation::{CivilDateTime, Timestamp, TimezoneId};

/// Most negative UTC offset in use (UTC-12:00), in minutes.
pub const MIN_OFFSET_MINUTES: i32 = -12 * 60;

/// Most positive UTC offset in use (UTC+14:00), in minutes.
pub const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Candidate spacing. Covers half-hour (India) and 45-minute (Nepal) zones.
pub const OFFSET_STEP_MINUTES: usize = 15;

/// Candidate offsets, most negative first.
pub fn candidate_offsets() -> impl Iterator<Item = i32> {
    (MIN_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).step_by(OFFSET_STEP_MINUTES)
}

/// Resolves `target` in `tz` by scanning every candidate offset.
///
/// All matching candidates are kept, so a fall-back overlap comes out as
/// [`Resolution::Ambiguous`] instead of whichever offset was tried first.
/// With no match the civil time sits in a gap and `fallback_offset_minutes`
/// is applied as a best-effort answer.
pub fn resolve(target: &CivilDateTime, tz: &TimezoneId, fallback_offset_minutes: i32) -> Resolution {
    let as_utc = Timestamp::from_naive_utc(target.to_naive());

    let matches: Vec<Timestamp> = candidate_offsets()
        .map(|offset| as_utc.plus_minutes(-i64::from(offset)))
        .filter(|candidate| CivilClockProjector::project(candidate, tz).matches(target))
        .collect();

    let earliest = matches.iter().min().copied();
    let latest = matches.iter().max().copied();

    match (earliest, latest) {
        (Some(earlier), Some(later)) if earlier != later => Resolution::Ambiguous { earlier, later },
        (Some(only), _) => Resolution::Unique(only),
        _ => Resolution::NonExistent {
            fallback: as_utc.plus_minutes(-i64::from(fallback_offset_minutes)),
        },
    }
}
