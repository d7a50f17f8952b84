//! LifecycleStatusClassifier - Derives badge tags for dated entities.
//!
//! Rules are evaluated independently and their tags unioned:
//!
//! 1. Publication window: `publishAt` in the future is `scheduled`,
//!    otherwise a passed `expiresAt` is `expired`. `isPublished` adds
//!    `published` or `draft` on its own.
//! 2. Time-bearing window (`startDateTime`): compared as instants. A passed
//!    end is `past`, otherwise a future start is `scheduled`. No end means
//!    open-ended.
//! 3. Day window (`startDate`/`endDate`): compared as civil dates in the
//!    company zone against today's civil date there.
//! 4. `isActive`: a dated special is only `active` on its start day.
//! 5. `isAvailable`: `available` or `unavailable`.
//! 6. Nothing fired: `inactive`.

use super::status_tag::{StatusTag, StatusTags};
use super::temporal_entity::TemporalEntity;
use crate::domain::clock::CivilDateCodec;
use crate::domain::foundation::{CivilDate, Timestamp, TimezoneId};
use crate::ports::Clock;

/// Classifies entities against the current instant and civil day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LifecycleStatusClassifier {
    dates: CivilDateCodec,
}

impl LifecycleStatusClassifier {
    pub fn new(dates: CivilDateCodec) -> Self {
        Self { dates }
    }

    /// Classifies `entity` as of the clock's current instant.
    pub fn classify(&self, entity: &TemporalEntity, tz: &TimezoneId, clock: &dyn Clock) -> StatusTags {
        self.classify_at(entity, tz, clock.now())
    }

    /// Classifies `entity` as of `now`. Never returns an empty set.
    pub fn classify_at(&self, entity: &TemporalEntity, tz: &TimezoneId, now: Timestamp) -> StatusTags {
        let today = self.dates.decode(&now, tz);
        let start_day = entity.start_date.map(|d| d.civil_date(&self.dates, tz));
        let end_day = entity.end_date.map(|d| d.civil_date(&self.dates, tz));

        let mut tags = StatusTags::new();
        apply_publication(entity, now, &mut tags);
        apply_time_window(entity, now, &mut tags);
        apply_day_window(start_day, end_day, today, &mut tags);
        apply_active_flag(entity.is_active, start_day, today, &mut tags);

        if let Some(available) = entity.is_available {
            tags.insert(if available {
                StatusTag::Available
            } else {
                StatusTag::Unavailable
            });
        }

        if tags.is_empty() {
            tags.insert(StatusTag::Inactive);
        }
        tags
    }
}

fn apply_publication(entity: &TemporalEntity, now: Timestamp, tags: &mut StatusTags) {
    if entity.publish_at.is_some() || entity.expires_at.is_some() {
        if entity.publish_at.is_some_and(|at| at > now) {
            tags.insert(StatusTag::Scheduled);
        } else if entity.expires_at.is_some_and(|at| at < now) {
            tags.insert(StatusTag::Expired);
        }
    }
    if let Some(published) = entity.is_published {
        tags.insert(if published {
            StatusTag::Published
        } else {
            StatusTag::Draft
        });
    }
}

fn apply_time_window(entity: &TemporalEntity, now: Timestamp, tags: &mut StatusTags) {
    let Some(start) = entity.start_date_time else {
        return;
    };
    if entity.end_date_time.is_some_and(|end| end < now) {
        tags.insert(StatusTag::Past);
    } else if start > now {
        tags.insert(StatusTag::Scheduled);
    }
}

fn apply_day_window(
    start_day: Option<CivilDate>,
    end_day: Option<CivilDate>,
    today: CivilDate,
    tags: &mut StatusTags,
) {
    if end_day.is_some_and(|end| end < today) {
        tags.insert(StatusTag::Past);
    } else if start_day.is_some_and(|start| start > today) {
        tags.insert(StatusTag::Scheduled);
    }
}

fn apply_active_flag(
    is_active: Option<bool>,
    start_day: Option<CivilDate>,
    today: CivilDate,
    tags: &mut StatusTags,
) {
    let Some(flag) = is_active else {
        return;
    };
    let active = match start_day {
        Some(start) => flag && start == today,
        None => flag,
    };
    tags.insert(if active {
        StatusTag::Active
    } else {
        StatusTag::Inactive
    });
}
