//! InstantSolver - Finds the instant at which a zone's wall clock shows
//! given civil fields.
//!
//! Civil time does not map one-to-one onto instants. Around a spring-forward
//! transition some readings never occur; around fall-back some occur twice.
//! [`InstantSolver::resolve`] reports which case applies and
//! [`InstantSolver::solve`] collapses it to a single instant using an explicit
//! policy, so callers never receive an error for valid-looking input.

use chrono::{LocalResult, TimeZone, Utc};
use serde::Deserialize;
use std::fmt;

use super::offset_search;
use super::projector::CivilClockProjector;
use crate::domain::foundation::{CivilDateTime, Timestamp, TimezoneId};

/// Offset used by the offset search when no candidate matches (UTC-7).
pub const DEFAULT_FALLBACK_OFFSET_MINUTES: i32 = -7 * 60;

/// Backend used to invert the wall-clock projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SolverStrategy {
    /// Ask the tz database directly.
    #[default]
    Tzdb,
    /// Project quarter-hour offset candidates and keep the ones that match.
    OffsetSearch,
}

/// Which instant to pick when a civil time occurs twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityPolicy {
    /// The first occurrence (still on daylight time after fall-back).
    Earlier,
    /// The second occurrence (back on standard time).
    #[default]
    Later,
}

/// Outcome of inverting a civil time in a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Exactly one instant shows the civil time.
    Unique(Timestamp),
    /// The civil time occurs twice; `earlier < later`.
    Ambiguous { earlier: Timestamp, later: Timestamp },
    /// The civil time is skipped by a transition. `fallback` is a
    /// best-effort instant near it, not an exact answer.
    NonExistent { fallback: Timestamp },
}

impl Resolution {
    /// Collapses the resolution to one instant.
    pub fn pick(&self, policy: AmbiguityPolicy) -> Timestamp {
        match (*self, policy) {
            (Resolution::Unique(at), _) => at,
            (Resolution::Ambiguous { earlier, .. }, AmbiguityPolicy::Earlier) => earlier,
            (Resolution::Ambiguous { later, .. }, AmbiguityPolicy::Later) => later,
            (Resolution::NonExistent { fallback }, _) => fallback,
        }
    }

    /// True when the civil time maps to exactly one instant.
    pub fn is_unique(&self) -> bool {
        matches!(self, Resolution::Unique(_))
    }
}

impl fmt::Display for SolverStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SolverStrategy::Tzdb => "tzdb",
            SolverStrategy::OffsetSearch => "offset_search",
        };
        write!(f, "{}", s)
    }
}

/// Converts civil date-times to instants for a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstantSolver {
    strategy: SolverStrategy,
    ambiguity: AmbiguityPolicy,
    fallback_offset_minutes: i32,
}

impl InstantSolver {
    pub fn new(
        strategy: SolverStrategy,
        ambiguity: AmbiguityPolicy,
        fallback_offset_minutes: i32,
    ) -> Self {
        Self {
            strategy,
            ambiguity,
            fallback_offset_minutes,
        }
    }

    /// Returns a copy using a different backend.
    pub fn with_strategy(mut self, strategy: SolverStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns a copy using a different tie-break.
    pub fn with_ambiguity(mut self, ambiguity: AmbiguityPolicy) -> Self {
        self.ambiguity = ambiguity;
        self
    }

    pub fn strategy(&self) -> SolverStrategy {
        self.strategy
    }

    pub fn ambiguity(&self) -> AmbiguityPolicy {
        self.ambiguity
    }

    /// Reports every instant at which `tz`'s wall clock reads `target`.
    pub fn resolve(&self, target: &CivilDateTime, tz: &TimezoneId) -> Resolution {
        match self.strategy {
            SolverStrategy::Tzdb => resolve_with_tzdb(target, tz),
            SolverStrategy::OffsetSearch => {
                offset_search::resolve(target, tz, self.fallback_offset_minutes)
            }
        }
    }

    /// Returns the single instant for `target` in `tz`.
    ///
    /// Never fails: ambiguous readings follow the configured policy and
    /// skipped readings degrade to the resolution's fallback.
    pub fn solve(&self, target: &CivilDateTime, tz: &TimezoneId) -> Timestamp {
        let resolution = self.resolve(target, tz);
        match resolution {
            Resolution::Unique(_) => {}
            Resolution::Ambiguous { earlier, later } => {
                tracing::debug!(
                    civil = %target,
                    timezone = %tz,
                    %earlier,
                    %later,
                    policy = ?self.ambiguity,
                    "Civil time is ambiguous"
                );
            }
            Resolution::NonExistent { fallback } => {
                tracing::warn!(
                    civil = %target,
                    timezone = %tz,
                    %fallback,
                    strategy = %self.strategy,
                    "Civil time does not exist, using fallback instant"
                );
            }
        }
        resolution.pick(self.ambiguity)
    }
}

impl Default for InstantSolver {
    fn default() -> Self {
        Self::new(
            SolverStrategy::default(),
            AmbiguityPolicy::default(),
            DEFAULT_FALLBACK_OFFSET_MINUTES,
        )
    }
}

fn resolve_with_tzdb(target: &CivilDateTime, tz: &TimezoneId) -> Resolution {
    let naive = target.to_naive();
    match tz.tz().from_local_datetime(&naive) {
        LocalResult::Single(at) => Resolution::Unique(Timestamp::from_datetime(at.with_timezone(&Utc))),
        LocalResult::Ambiguous(first, second) => {
            let first = Timestamp::from_datetime(first.with_timezone(&Utc));
            let second = Timestamp::from_datetime(second.with_timezone(&Utc));
            Resolution::Ambiguous {
                earlier: first.min(second),
                later: first.max(second),
            }
        }
        LocalResult::None => {
            // Apply the offset from before the gap; the result lands just past it.
            let as_utc = Timestamp::from_naive_utc(naive);
            let offset = CivilClockProjector::offset_minutes(&as_utc.minus_hours(24), tz);
            Resolution::NonExistent {
                fallback: as_utc.plus_minutes(-i64::from(offset)),
            }
        }
    }
}
