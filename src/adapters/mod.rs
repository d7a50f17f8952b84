//! Adapters - Implementations of port interfaces.
//!
//! - `clock` - System and fixed clocks
//! - `settings` - Settings store backends (PostgreSQL, in-memory)

pub mod clock;
pub mod settings;

pub use clock::{FixedClock, SystemClock};
pub use settings::{InMemorySettingsReader, PostgresSettingsReader};
