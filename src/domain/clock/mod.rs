//! Wall-clock engine.
//!
//! Converts between civil values (no zone attached) and absolute instants
//! for an explicit IANA zone.
//!
//! # Module Organization
//!
//! - `projector` - instant to civil fields; the only tzdata consumer
//! - `solver` - civil fields to instant, with explicit gap/overlap outcomes
//! - `offset_search` - projection-driven alternative backend for the solver
//! - `date_codec` - day-granularity values (`YYYY-MM-DD`)
//! - `date_time_codec` - minute-granularity values (`YYYY-MM-DDTHH:mm`)

mod date_codec;
mod date_time_codec;
pub mod offset_search;
mod projector;
mod solver;

pub use date_codec::CivilDateCodec;
pub use date_time_codec::CivilDateTimeCodec;
pub use projector::CivilClockProjector;
pub use solver::{
    AmbiguityPolicy, InstantSolver, Resolution, SolverStrategy, DEFAULT_FALLBACK_OFFSET_MINUTES,
};
