//! CivilProjection: what a wall clock in some zone reads at an instant.

use super::{CivilDate, CivilDateTime};

/// Civil fields observed for an instant in a zone, seconds included.
///
/// Intermediate comparison value only; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilProjection {
    pub date_time: CivilDateTime,
    pub second: u32,
}

impl CivilProjection {
    pub fn date(&self) -> CivilDate {
        self.date_time.date()
    }

    /// True when date, hour and minute equal `target`; seconds are ignored.
    pub fn matches(&self, target: &CivilDateTime) -> bool {
        self.date_time == *target
    }
}
