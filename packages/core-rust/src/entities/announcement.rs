//! Campus-wide announcement records.

use serde::{Deserialize, Serialize};

/// The kind of announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementType {
    /// Time-sensitive notice, e.g. a registration deadline.
    Alert,
    /// Campus event.
    Event,
    /// Pointer to a resource (library hours, tutoring, forms).
    Resource,
}

/// Display priority of an announcement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Below-the-fold notice.
    Low,
    /// Regular placement. The default.
    #[default]
    Normal,
    /// Highlighted at the top of the feed.
    High,
}

/// A campus-wide announcement. Not related to any [`User`](crate::User).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    /// Unique identity, assigned at creation.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Announcement kind.
    #[serde(rename = "type")]
    pub kind: AnnouncementType,
    /// Display priority.
    pub priority: Priority,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<i64>,
}

/// Create input for [`Announcement`].
///
/// `priority` defaults to [`Priority::Normal`] when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAnnouncement {
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Announcement kind.
    #[serde(rename = "type")]
    pub kind: AnnouncementType,
    /// Display priority; the store defaults this to normal.
    #[serde(default)]
    pub priority: Option<Priority>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announcement_serializes_camel_case() {
        let announcement = Announcement {
            id: "an1".to_string(),
            title: "Registration Alert".to_string(),
            content: "Spring registration opens November 15th".to_string(),
            kind: AnnouncementType::Alert,
            priority: Priority::High,
            created_at: Some(3_000),
        };

        let json = serde_json::to_value(&announcement).unwrap();
        assert_eq!(json["type"], "alert");
        assert_eq!(json["priority"], "high");
        assert_eq!(json["createdAt"], 3_000);
    }

    #[test]
    fn new_announcement_without_priority() {
        let input: NewAnnouncement = serde_json::from_str(
            r#"{"title":"Career Fair","content":"Nov 20th","type":"event"}"#,
        )
        .unwrap();
        assert!(input.priority.is_none());
    }
}
