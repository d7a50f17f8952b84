//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects every wall-clock conversion is expressed in
//! (instants, zones, civil dates and times) plus the domain error types.

mod civil_date;
mod civil_date_time;
mod civil_projection;
mod errors;
mod timestamp;
mod timezone_id;

pub use civil_date::CivilDate;
pub use civil_date_time::CivilDateTime;
pub use civil_projection::CivilProjection;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use timestamp::Timestamp;
pub use timezone_id::{TimezoneId, DEFAULT_TIMEZONE};
