//! TimezoneResolver - Looks up the company's IANA zone.

use std::sync::Arc;

use crate::domain::foundation::TimezoneId;
use crate::ports::{SettingsReader, TIMEZONE_SETTING_KEY};

/// Resolves the active zone from the `timezone` setting.
///
/// Resolution never fails. A missing setting, an unreachable store or a
/// value that is not a known IANA zone all yield the configured default;
/// the latter two are logged at `warn`, which is the only place a
/// misconfiguration shows up.
pub struct TimezoneResolver {
    settings: Arc<dyn SettingsReader>,
    default: TimezoneId,
}

impl TimezoneResolver {
    pub fn new(settings: Arc<dyn SettingsReader>, default: TimezoneId) -> Self {
        Self { settings, default }
    }

    /// The zone used when resolution degrades.
    pub fn default_timezone(&self) -> TimezoneId {
        self.default
    }

    pub async fn resolve(&self) -> TimezoneId {
        let raw = match self.settings.get(TIMEZONE_SETTING_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(timezone = %self.default, "No timezone setting, using default");
                return self.default;
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    timezone = %self.default,
                    "Timezone setting unreadable, using default"
                );
                return self.default;
            }
        };

        match TimezoneId::parse(raw.trim()) {
            Ok(tz) => {
                tracing::debug!(timezone = %tz, "Resolved timezone from settings");
                tz
            }
            Err(e) => {
                tracing::warn!(
                    value = %raw,
                    error = %e,
                    timezone = %self.default,
                    "Timezone setting is not a valid IANA zone, using default"
                );
                self.default
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode};
    use async_trait::async_trait;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementation
    // ════════════════════════════════════════════════════════════════════════════

    struct MockSettingsReader {
        value: Option<String>,
        fail_read: bool,
    }

    impl MockSettingsReader {
        fn empty() -> Self {
            Self {
                value: None,
                fail_read: false,
            }
        }

        fn with_timezone(value: &str) -> Self {
            Self {
                value: Some(value.to_string()),
                fail_read: false,
            }
        }

        fn failing() -> Self {
            Self {
                value: None,
                fail_read: true,
            }
        }
    }

    #[async_trait]
    impl SettingsReader for MockSettingsReader {
        async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
            if self.fail_read {
                return Err(DomainError::new(ErrorCode::DatabaseError, "Simulated read failure"));
            }
            assert_eq!(key, TIMEZONE_SETTING_KEY);
            Ok(self.value.clone())
        }
    }

    fn resolver(reader: MockSettingsReader) -> TimezoneResolver {
        TimezoneResolver::new(Arc::new(reader), TimezoneId::denver())
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn uses_configured_zone() {
        let tz = resolver(MockSettingsReader::with_timezone("America/New_York")).resolve().await;
        assert_eq!(tz.as_str(), "America/New_York");
    }

    #[tokio::test]
    async fn trims_surrounding_whitespace() {
        let tz = resolver(MockSettingsReader::with_timezone("  Europe/Paris\n")).resolve().await;
        assert_eq!(tz.as_str(), "Europe/Paris");
    }

    #[tokio::test]
    async fn missing_setting_uses_default() {
        let tz = resolver(MockSettingsReader::empty()).resolve().await;
        assert_eq!(tz, TimezoneId::denver());
    }

    #[tokio::test]
    async fn read_failure_uses_default() {
        let tz = resolver(MockSettingsReader::failing()).resolve().await;
        assert_eq!(tz, TimezoneId::denver());
    }

    #[tokio::test]
    async fn invalid_zone_uses_default() {
        for value in ["", "Mountain Time", "GMT-7 (Denver)"] {
            let tz = resolver(MockSettingsReader::with_timezone(value)).resolve().await;
            assert_eq!(tz, TimezoneId::denver(), "{}", value);
        }
    }

    #[tokio::test]
    async fn default_comes_from_construction() {
        let chicago = TimezoneId::parse("America/Chicago").unwrap();
        let resolver = TimezoneResolver::new(Arc::new(MockSettingsReader::empty()), chicago);
        assert_eq!(resolver.default_timezone(), chicago);
        assert_eq!(resolver.resolve().await, chicago);
    }
}
