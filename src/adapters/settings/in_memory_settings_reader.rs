//! In-Memory Settings Reader Adapter
//!
//! Keeps settings in a map. Used by tests and by processes started
//! without database access.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::SettingsReader;

/// In-memory key/value settings.
#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsReader {
    values: Arc<RwLock<HashMap<String, String>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemorySettingsReader {
    /// Create an empty settings store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a single setting
    pub fn with_setting(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(key.into(), value.into());
        Self {
            values: Arc::new(RwLock::new(values)),
            unavailable: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a store whose every read fails
    pub fn unavailable() -> Self {
        let store = Self::new();
        store.set_unavailable(true);
        store
    }

    /// Toggle simulated outage
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub async fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.values.write().await.insert(key.into(), value.into());
    }

    pub async fn remove(&self, key: &str) {
        self.values.write().await.remove(key);
    }
}

#[async_trait]
impl SettingsReader for InMemorySettingsReader {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::new(
                ErrorCode::SettingsUnavailable,
                "Settings store is unavailable",
            ));
        }
        Ok(self.values.read().await.get(key).cloned())
    }
}
