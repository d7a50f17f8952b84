//! Settings Reader Port - Read access to the key/value settings store.
//!
//! The wall-clock engine only ever asks for [`TIMEZONE_SETTING_KEY`].
//! Everything else in the settings table belongs to the wider application.
//!
//! # Example
//!
//! ```ignore
//! async fn configured_zone(reader: &dyn SettingsReader) -> Option<String> {
//!     reader.get(TIMEZONE_SETTING_KEY).await.ok().flatten()
//! }
//! ```

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// Settings key holding the company's IANA zone identifier.
pub const TIMEZONE_SETTING_KEY: &str = "timezone";

/// Reader port for application settings.
#[async_trait]
pub trait SettingsReader: Send + Sync {
    /// Get the raw value stored under `key`.
    ///
    /// Returns `None` if the key is not set.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` when the store cannot be reached, e.g. when
    /// invoked from a context with no database access.
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;
}
