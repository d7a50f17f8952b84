//! Status handlers.
//!
//! ## Queries
//! - Classify the lifecycle status of a batch of dated entities

mod classify_status;

pub use classify_status::{ClassifyStatusHandler, ClassifyStatusQuery, ClassifyStatusResult};
