//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (instants, zones, civil values, errors)
//! - `clock` - Wall-clock engine converting between civil values and instants
//! - `lifecycle` - Status tags for dated events, specials and announcements

pub mod clock;
pub mod foundation;
pub mod lifecycle;
