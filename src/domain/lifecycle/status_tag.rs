//! StatusTag enum and the ordered tag set produced by classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Badge-level lifecycle status of a dated entity.
///
/// The serialized names are consumed by presentation code and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTag {
    Scheduled,
    Active,
    Past,
    Expired,
    Published,
    Draft,
    Available,
    Unavailable,
    Inactive,
}

impl StatusTag {
    /// Returns the wire name of the tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTag::Scheduled => "scheduled",
            StatusTag::Active => "active",
            StatusTag::Past => "past",
            StatusTag::Expired => "expired",
            StatusTag::Published => "published",
            StatusTag::Draft => "draft",
            StatusTag::Available => "available",
            StatusTag::Unavailable => "unavailable",
            StatusTag::Inactive => "inactive",
        }
    }
}

impl fmt::Display for StatusTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Insertion-ordered, duplicate-free set of status tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StatusTags(Vec<StatusTag>);

impl StatusTags {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds `tag` unless already present. Returns true if it was added.
    pub fn insert(&mut self, tag: StatusTag) -> bool {
        if self.0.contains(&tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    pub fn contains(&self, tag: StatusTag) -> bool {
        self.0.contains(&tag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusTag> {
        self.0.iter()
    }

    /// Wire names in insertion order.
    pub fn as_strs(&self) -> Vec<&'static str> {
        self.0.iter().map(StatusTag::as_str).collect()
    }
}

impl FromIterator<StatusTag> for StatusTags {
    fn from_iter<I: IntoIterator<Item = StatusTag>>(iter: I) -> Self {
        let mut tags = StatusTags::new();
        for tag in iter {
            tags.insert(tag);
        }
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_are_stable() {
        let all = [
            (StatusTag::Scheduled, "scheduled"),
            (StatusTag::Active, "active"),
            (StatusTag::Past, "past"),
            (StatusTag::Expired, "expired"),
            (StatusTag::Published, "published"),
            (StatusTag::Draft, "draft"),
            (StatusTag::Available, "available"),
            (StatusTag::Unavailable, "unavailable"),
            (StatusTag::Inactive, "inactive"),
        ];
        for (tag, name) in all {
            assert_eq!(tag.as_str(), name);
            assert_eq!(tag.to_string(), name);
            assert_eq!(serde_json::to_string(&tag).unwrap(), format!("\"{}\"", name));
        }
    }

    #[test]
    fn insert_skips_duplicates() {
        let mut tags = StatusTags::new();
        assert!(tags.insert(StatusTag::Scheduled));
        assert!(tags.insert(StatusTag::Published));
        assert!(!tags.insert(StatusTag::Scheduled));
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn keeps_insertion_order() {
        let tags: StatusTags = [StatusTag::Published, StatusTag::Scheduled, StatusTag::Published]
            .into_iter()
            .collect();
        assert_eq!(tags.as_strs(), vec!["published", "scheduled"]);
    }

    #[test]
    fn serializes_as_array_of_names() {
        let tags: StatusTags = [StatusTag::Past, StatusTag::Inactive].into_iter().collect();
        assert_eq!(serde_json::to_string(&tags).unwrap(), "[\"past\",\"inactive\"]");
    }
}
