//! Seed data for the portal store.
//!
//! The store starts empty; a [`Seed`] supplies the initial dataset as
//! configuration rather than code. Records carry explicit ids and
//! timestamps so a seeded store is fully deterministic. The built-in
//! [`Seed::sample`] reproduces the demo campus the dashboard ships with;
//! `--seed <path>` loads a JSON file of the same shape instead.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::info;

use campushub_core::{
    Announcement, AnnouncementType, Assessment, AssessmentStatus, AssessmentType, CampusLocation,
    Coordinates, Course, CourseSchedule, LocationStatus, LocationType, Message, MessageType,
    Priority, User,
};

use crate::storage::PortalStore;

/// A complete initial dataset, one list per entity kind.
///
/// Every list defaults to empty, so a seed file may populate only the
/// collections it cares about.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Seed {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub assessments: Vec<Assessment>,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub announcements: Vec<Announcement>,
    #[serde(default)]
    pub locations: Vec<CampusLocation>,
}

impl Seed {
    /// Loads a seed from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse as a
    /// seed document.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read seed file {}", path.display()))?;
        serde_json::from_slice(&bytes)
            .with_context(|| format!("failed to parse seed file {}", path.display()))
    }

    /// Total number of records across all entity kinds.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.users.len()
            + self.courses.len()
            + self.assessments.len()
            + self.messages.len()
            + self.announcements.len()
            + self.locations.len()
    }

    /// The built-in demo campus: one student, two courses, three
    /// assessments, direct and channel messages, announcements, and three
    /// map locations.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn sample() -> Self {
        // Fixed reference instant so seeded data is deterministic.
        const NOW: i64 = 1_731_600_000_000;
        const MINUTE: i64 = 60_000;
        const HOUR: i64 = 60 * MINUTE;
        const DAY: i64 = 24 * HOUR;

        Self {
            users: vec![User {
                id: "user1".to_string(),
                username: "alexjohnson".to_string(),
                password: "password123".to_string(),
                name: "Alex Johnson".to_string(),
                email: "alex.johnson@university.edu".to_string(),
                gpa: Some("4.2".to_string()),
                credits: 12,
                avatar: None,
                created_at: Some(NOW),
            }],
            courses: vec![
                Course {
                    id: "course1".to_string(),
                    name: "Organic Chemistry".to_string(),
                    code: "CHEM 301".to_string(),
                    instructor: "Prof. Johnson".to_string(),
                    room: "Science 204".to_string(),
                    schedule: Some(CourseSchedule {
                        day: "MWF".to_string(),
                        start_time: "10:00".to_string(),
                        end_time: "11:30".to_string(),
                    }),
                    description: Some("Advanced organic chemistry principles".to_string()),
                    created_at: Some(NOW),
                },
                Course {
                    id: "course2".to_string(),
                    name: "Calculus II".to_string(),
                    code: "MATH 202".to_string(),
                    instructor: "Prof. Smith".to_string(),
                    room: "Math 108".to_string(),
                    schedule: Some(CourseSchedule {
                        day: "TTh".to_string(),
                        start_time: "13:00".to_string(),
                        end_time: "14:30".to_string(),
                    }),
                    description: Some("Integral calculus and series".to_string()),
                    created_at: Some(NOW),
                },
            ],
            assessments: vec![
                Assessment {
                    id: "assessment1".to_string(),
                    course_id: "course2".to_string(),
                    title: "Calculus II - Chapter 7 Quiz".to_string(),
                    kind: AssessmentType::Quiz,
                    due_date: None,
                    total_questions: Some(10),
                    completed_questions: Some(6),
                    time_remaining: Some(23),
                    grade: None,
                    status: AssessmentStatus::Active,
                    created_at: Some(NOW),
                },
                Assessment {
                    id: "assessment2".to_string(),
                    course_id: "course1".to_string(),
                    title: "Chemistry Lab Report".to_string(),
                    kind: AssessmentType::Assignment,
                    due_date: Some(NOW + 2 * DAY),
                    total_questions: None,
                    completed_questions: None,
                    time_remaining: None,
                    grade: None,
                    status: AssessmentStatus::Pending,
                    created_at: Some(NOW),
                },
                Assessment {
                    id: "assessment3".to_string(),
                    course_id: "course1".to_string(),
                    title: "Physics Midterm".to_string(),
                    kind: AssessmentType::Exam,
                    due_date: None,
                    total_questions: None,
                    completed_questions: None,
                    time_remaining: None,
                    grade: Some("94%".to_string()),
                    status: AssessmentStatus::Graded,
                    created_at: Some(NOW),
                },
            ],
            messages: vec![
                Message {
                    id: "message1".to_string(),
                    sender_id: "user2".to_string(),
                    recipient_id: Some("user1".to_string()),
                    group_name: Some("Study Group: Biology".to_string()),
                    content: "Can we meet at 3 PM for the lab review?".to_string(),
                    kind: MessageType::Group,
                    channel: None,
                    upvotes: 0,
                    is_admin: false,
                    is_pinned: false,
                    is_read: false,
                    created_at: Some(NOW - 15 * MINUTE),
                },
                Message {
                    id: "message2".to_string(),
                    sender_id: "user3".to_string(),
                    recipient_id: Some("user1".to_string()),
                    group_name: None,
                    content: "Office hours moved to Thursday 2-4 PM".to_string(),
                    kind: MessageType::Direct,
                    channel: None,
                    upvotes: 0,
                    is_admin: false,
                    is_pinned: false,
                    is_read: false,
                    created_at: Some(NOW - HOUR),
                },
                Message {
                    id: "message3".to_string(),
                    sender_id: "user4".to_string(),
                    recipient_id: None,
                    group_name: None,
                    content: "Welcome to #general. Pinned: campus wifi details.".to_string(),
                    kind: MessageType::Channel,
                    channel: Some("general".to_string()),
                    upvotes: 3,
                    is_admin: true,
                    is_pinned: true,
                    is_read: false,
                    created_at: Some(NOW - 2 * DAY),
                },
                Message {
                    id: "message4".to_string(),
                    sender_id: "user2".to_string(),
                    recipient_id: None,
                    group_name: None,
                    content: "Anyone have notes from Friday's CHEM 301 lecture?".to_string(),
                    kind: MessageType::Channel,
                    channel: Some("general".to_string()),
                    upvotes: 7,
                    is_admin: false,
                    is_pinned: false,
                    is_read: false,
                    created_at: Some(NOW - 3 * HOUR),
                },
                Message {
                    id: "message5".to_string(),
                    sender_id: "user5".to_string(),
                    recipient_id: None,
                    group_name: None,
                    content: "Study room B204 is free after 6 PM today.".to_string(),
                    kind: MessageType::Channel,
                    channel: Some("general".to_string()),
                    upvotes: 7,
                    is_admin: false,
                    is_pinned: false,
                    is_read: false,
                    created_at: Some(NOW - HOUR),
                },
            ],
            announcements: vec![
                Announcement {
                    id: "announcement1".to_string(),
                    title: "Registration Alert".to_string(),
                    content: "Spring semester registration opens November 15th at 8 AM"
                        .to_string(),
                    kind: AnnouncementType::Alert,
                    priority: Priority::High,
                    created_at: Some(NOW - 3 * HOUR),
                },
                Announcement {
                    id: "announcement2".to_string(),
                    title: "Career Fair".to_string(),
                    content: "Tech companies recruiting - Student Center, Nov 20th".to_string(),
                    kind: AnnouncementType::Event,
                    priority: Priority::Normal,
                    created_at: Some(NOW),
                },
            ],
            locations: vec![
                CampusLocation {
                    id: "location1".to_string(),
                    name: "Science Building".to_string(),
                    kind: LocationType::Building,
                    coordinates: Some(Coordinates { x: 4.0, y: 6.0 }),
                    status: LocationStatus::Open,
                    description: Some("Biology and Chemistry Labs".to_string()),
                    hours: Some("6 AM - 10 PM".to_string()),
                },
                CampusLocation {
                    id: "location2".to_string(),
                    name: "Student Union".to_string(),
                    kind: LocationType::Dining,
                    coordinates: Some(Coordinates { x: 12.0, y: 8.0 }),
                    status: LocationStatus::Open,
                    description: Some("Dining and Recreation".to_string()),
                    hours: Some("Open until 9 PM".to_string()),
                },
                CampusLocation {
                    id: "location3".to_string(),
                    name: "Main Library".to_string(),
                    kind: LocationType::Library,
                    coordinates: Some(Coordinates { x: 12.0, y: 8.0 }),
                    status: LocationStatus::Open,
                    description: Some("Study spaces and resources".to_string()),
                    hours: Some("24/7 Access".to_string()),
                },
            ],
        }
    }
}

impl PortalStore {
    /// Loads every record in `seed` into the store.
    ///
    /// Records keep the ids and timestamps they carry in the seed; within
    /// each entity kind, seed order becomes insertion order. A record whose
    /// id is already present replaces the stored one in place.
    pub fn apply_seed(&self, seed: Seed) {
        let count = seed.record_count();
        for user in seed.users {
            self.users.insert(user);
        }
        for course in seed.courses {
            self.courses.insert(course);
        }
        for assessment in seed.assessments {
            self.assessments.insert(assessment);
        }
        for message in seed.messages {
            self.messages.insert(message);
        }
        for announcement in seed.announcements {
            self.announcements.insert(announcement);
        }
        for location in seed.locations {
            self.locations.insert(location);
        }
        info!(records = count, "seed applied");
    }
}
