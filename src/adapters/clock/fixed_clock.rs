//! Fixed clock adapter.

use std::sync::{Arc, RwLock};

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// Clock that always reads the instant it was last set to.
///
/// Clones share the same instant, so a test can move time forward after
/// handing the clock to a handler.
#[derive(Debug, Clone)]
pub struct FixedClock {
    at: Arc<RwLock<Timestamp>>,
}

impl FixedClock {
    pub fn new(at: Timestamp) -> Self {
        Self {
            at: Arc::new(RwLock::new(at)),
        }
    }

    /// Moves the clock to `at`.
    pub fn set(&self, at: Timestamp) {
        let mut guard = self.at.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = at;
    }

    /// Moves the clock forward by `minutes`.
    pub fn advance_minutes(&self, minutes: i64) {
        let mut guard = self.at.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = guard.plus_minutes(minutes);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self.at.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
