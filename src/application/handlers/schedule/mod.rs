//! Schedule handlers.
//!
//! ## Commands
//! - Normalize form input for events and dated specials into storable instants

mod normalize_schedule;

pub use normalize_schedule::{
    NormalizeScheduleCommand, NormalizeScheduleHandler, NormalizeScheduleResult, NormalizedSchedule,
};
