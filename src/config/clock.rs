//! Wall-clock engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::clock::{
    offset_search, AmbiguityPolicy, CivilDateCodec, CivilDateTimeCodec, InstantSolver,
    SolverStrategy, DEFAULT_FALLBACK_OFFSET_MINUTES,
};
use crate::domain::foundation::{TimezoneId, DEFAULT_TIMEZONE};

/// Wall-clock engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClockConfig {
    /// Zone used when the `timezone` setting is missing or unusable
    #[serde(default = "default_timezone")]
    pub default_timezone: String,

    /// Backend used to turn civil times into instants
    #[serde(default)]
    pub strategy: SolverStrategy,

    /// Which occurrence wins when a civil time happens twice
    #[serde(default)]
    pub ambiguity: AmbiguityPolicy,

    /// Offset applied by the offset search when nothing matches
    #[serde(default = "default_fallback_offset")]
    pub fallback_offset_minutes: i32,
}

impl ClockConfig {
    /// Parsed default zone.
    ///
    /// Falls back to the stock default if the configured name is unknown;
    /// `validate` reports that case at startup.
    pub fn default_timezone_id(&self) -> TimezoneId {
        TimezoneId::parse(&self.default_timezone).unwrap_or_default()
    }

    /// Solver built from this configuration
    pub fn solver(&self) -> InstantSolver {
        InstantSolver::new(self.strategy, self.ambiguity, self.fallback_offset_minutes)
    }

    /// Day-granularity codec built from this configuration
    pub fn date_codec(&self) -> CivilDateCodec {
        CivilDateCodec::new(self.solver())
    }

    /// Minute-granularity codec built from this configuration
    pub fn date_time_codec(&self) -> CivilDateTimeCodec {
        CivilDateTimeCodec::new(self.solver())
    }

    /// Validate clock configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        TimezoneId::parse(&self.default_timezone)
            .map_err(|e| ValidationError::InvalidTimezone(e.to_string()))?;

        let offset = self.fallback_offset_minutes;
        if !(offset_search::MIN_OFFSET_MINUTES..=offset_search::MAX_OFFSET_MINUTES).contains(&offset)
            || offset % 15 != 0
        {
            return Err(ValidationError::InvalidFallbackOffset(offset));
        }
        Ok(())
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            default_timezone: default_timezone(),
            strategy: SolverStrategy::default(),
            ambiguity: AmbiguityPolicy::default(),
            fallback_offset_minutes: default_fallback_offset(),
        }
    }
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

fn default_fallback_offset() -> i32 {
    DEFAULT_FALLBACK_OFFSET_MINUTES
}
