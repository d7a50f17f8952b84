//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod schedule;
pub mod status;
pub mod timezone;

pub use schedule::{
    NormalizeScheduleCommand, NormalizeScheduleHandler, NormalizeScheduleResult, NormalizedSchedule,
};
pub use status::{ClassifyStatusHandler, ClassifyStatusQuery, ClassifyStatusResult};
pub use timezone::TimezoneResolver;
