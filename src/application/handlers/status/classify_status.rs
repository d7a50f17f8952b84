//! ClassifyStatusHandler - Query handler producing badge tags for a page of
//! events, specials or announcements.

use serde::Serialize;
use std::sync::Arc;

use crate::application::handlers::timezone::TimezoneResolver;
use crate::domain::clock::CivilDateCodec;
use crate::domain::foundation::{CivilDate, TimezoneId};
use crate::domain::lifecycle::{LifecycleStatusClassifier, StatusTags, TemporalEntity};
use crate::ports::Clock;

/// Query to classify a batch of entities.
#[derive(Debug, Clone, Default)]
pub struct ClassifyStatusQuery {
    pub entities: Vec<TemporalEntity>,
}

/// Tags for each entity, in query order, plus the frame they were computed in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyStatusResult {
    pub timezone: TimezoneId,
    pub today: CivilDate,
    pub statuses: Vec<StatusTags>,
}

/// Handler for lifecycle status classification.
///
/// The zone is resolved and the clock read once per query so every entity
/// in a page is judged against the same instant.
pub struct ClassifyStatusHandler {
    timezones: Arc<TimezoneResolver>,
    clock: Arc<dyn Clock>,
    classifier: LifecycleStatusClassifier,
    dates: CivilDateCodec,
}

impl ClassifyStatusHandler {
    pub fn new(timezones: Arc<TimezoneResolver>, clock: Arc<dyn Clock>, dates: CivilDateCodec) -> Self {
        Self {
            timezones,
            clock,
            classifier: LifecycleStatusClassifier::new(dates),
            dates,
        }
    }

    pub async fn handle(&self, query: ClassifyStatusQuery) -> ClassifyStatusResult {
        let timezone = self.timezones.resolve().await;
        let now = self.clock.now();
        let today = self.dates.decode(&now, &timezone);

        let statuses: Vec<StatusTags> = query
            .entities
            .iter()
            .map(|entity| self.classifier.classify_at(entity, &timezone, now))
            .collect();

        tracing::debug!(
            timezone = %timezone,
            today = %today,
            count = statuses.len(),
            "Classified entity statuses"
        );

        ClassifyStatusResult {
            timezone,
            today,
            statuses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use crate::adapters::settings::InMemorySettingsReader;
    use crate::domain::foundation::Timestamp;
    use crate::domain::lifecycle::StatusTag;
    use crate::ports::TIMEZONE_SETTING_KEY;

    fn utc(rfc3339: &str) -> Timestamp {
        Timestamp::from_datetime(
            chrono::DateTime::parse_from_rfc3339(rfc3339)
                .unwrap()
                .with_timezone(&chrono::Utc),
        )
    }

    fn handler(settings: InMemorySettingsReader, now: Timestamp) -> ClassifyStatusHandler {
        let timezones = Arc::new(TimezoneResolver::new(Arc::new(settings), TimezoneId::denver()));
        ClassifyStatusHandler::new(timezones, Arc::new(FixedClock::new(now)), CivilDateCodec::default())
    }

    fn special_on(day: &str) -> TemporalEntity {
        let date: CivilDate = day.parse().unwrap();
        TemporalEntity::new()
            .with_active(true)
            .with_dates(date, Some(date.into()))
    }

    #[tokio::test]
    async fn reports_frame_and_keeps_order() {
        let handler = handler(InMemorySettingsReader::new(), utc("2025-06-11T03:00:00Z"));
        let result = handler
            .handle(ClassifyStatusQuery {
                entities: vec![special_on("2025-06-10"), TemporalEntity::new(), special_on("2025-06-09")],
            })
            .await;

        assert_eq!(result.timezone, TimezoneId::denver());
        assert_eq!(result.today.to_string(), "2025-06-10");
        assert_eq!(result.statuses.len(), 3);
        assert_eq!(result.statuses[0].as_strs(), vec!["active"]);
        assert_eq!(result.statuses[1].as_strs(), vec!["inactive"]);
        assert_eq!(result.statuses[2].as_strs(), vec!["past", "inactive"]);
    }

    #[tokio::test]
    async fn configured_zone_changes_the_civil_day() {
        let settings = InMemorySettingsReader::with_setting(TIMEZONE_SETTING_KEY, "UTC");
        let handler = handler(settings, utc("2025-06-11T03:00:00Z"));
        let result = handler
            .handle(ClassifyStatusQuery {
                entities: vec![special_on("2025-06-10")],
            })
            .await;

        assert_eq!(result.today.to_string(), "2025-06-11");
        assert!(result.statuses[0].contains(StatusTag::Past));
    }

    #[tokio::test]
    async fn unavailable_settings_still_classify() {
        let handler = handler(InMemorySettingsReader::unavailable(), utc("2025-06-11T03:00:00Z"));
        let result = handler
            .handle(ClassifyStatusQuery {
                entities: vec![special_on("2025-06-10")],
            })
            .await;

        assert_eq!(result.timezone, TimezoneId::denver());
        assert!(result.statuses[0].contains(StatusTag::Active));
    }

    #[tokio::test]
    async fn result_serializes_for_presentation() {
        let handler = handler(InMemorySettingsReader::new(), utc("2025-06-11T03:00:00Z"));
        let result = handler
            .handle(ClassifyStatusQuery {
                entities: vec![special_on("2025-06-10")],
            })
            .await;

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["timezone"], "America/Denver");
        assert_eq!(json["today"], "2025-06-10");
        assert_eq!(json["statuses"][0][0], "active");
    }
}
