//! Lifecycle status classification for dated entities (events, specials,
//! announcements).

mod classifier;
mod status_tag;
mod temporal_entity;

pub use classifier::LifecycleStatusClassifier;
pub use status_tag::{StatusTag, StatusTags};
pub use temporal_entity::{DayValue, TemporalEntity};
