//! Clock Adapters
//!
//! - **SystemClock** - Reads the OS clock
//! - **FixedClock** - Returns a settable instant (tests, replays)

mod fixed_clock;
mod system_clock;

pub use fixed_clock::FixedClock;
pub use system_clock::SystemClock;
