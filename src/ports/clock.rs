//! Clock Port - Source of the current instant.
//!
//! Classification compares entity fields against "now". Reading it through
//! a port keeps every rule deterministic under test.

use crate::domain::foundation::Timestamp;

/// Port for reading the current instant.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Timestamp;
}
