//! The portal record store: one collection per entity kind.
//!
//! [`PortalStore`] owns identity generation and default-value
//! materialization. Every `create_*` builds a complete record — fresh id,
//! creation timestamp where the entity has one, documented defaults for
//! omitted optionals — stores it, and returns the stored snapshot.
//!
//! Defaults applied on create:
//!
//! | Entity         | Field      | Default   |
//! |----------------|------------|-----------|
//! | User           | credits    | 0         |
//! | Assessment     | status     | pending   |
//! | Message        | type       | direct    |
//! | Message        | upvotes    | 0         |
//! | Message        | isAdmin    | false     |
//! | Message        | isPinned   | false     |
//! | Message        | isRead     | false     |
//! | Announcement   | priority   | normal    |
//! | CampusLocation | status     | open      |
//!
//! Everything else that the caller omits stays absent. Referential fields
//! (`course_id`, `sender_id`, `recipient_id`) are stored unvalidated.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use campushub_core::{
    Announcement, Assessment, AssessmentPatch, CampusLocation, Course, Message, MessagePatch,
    NewAnnouncement, NewAssessment, NewCampusLocation, NewCourse, NewMessage, NewUser, User,
};

use super::collection::{Collection, Keyed};
use super::id::IdGenerator;

impl Keyed for User {
    const KIND: &'static str = "user";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Keyed for Course {
    const KIND: &'static str = "course";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Keyed for Assessment {
    const KIND: &'static str = "assessment";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Keyed for Message {
    const KIND: &'static str = "message";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Keyed for Announcement {
    const KIND: &'static str = "announcement";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Keyed for CampusLocation {
    const KIND: &'static str = "location";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Current wall-clock time in milliseconds since the Unix epoch.
pub(crate) fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
}

/// In-memory store for all six entity kinds.
///
/// Constructed once at process start and shared as `Arc<PortalStore>` with
/// every handler; there is no global instance. Operations never fail — an
/// unknown identity surfaces as `None`, never as an error.
pub struct PortalStore {
    pub(crate) users: Collection<User>,
    pub(crate) courses: Collection<Course>,
    pub(crate) assessments: Collection<Assessment>,
    pub(crate) messages: Collection<Message>,
    pub(crate) announcements: Collection<Announcement>,
    pub(crate) locations: Collection<CampusLocation>,
    ids: Arc<dyn IdGenerator>,
}

impl PortalStore {
    /// Creates an empty store using `ids` for identity generation.
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            users: Collection::new(),
            courses: Collection::new(),
            assessments: Collection::new(),
            messages: Collection::new(),
            announcements: Collection::new(),
            locations: Collection::new(),
            ids,
        }
    }

    /// Total number of records across all collections. Reported by the
    /// health endpoint.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.users.len()
            + self.courses.len()
            + self.assessments.len()
            + self.messages.len()
            + self.announcements.len()
            + self.locations.len()
    }

    // --- Users ---

    /// Returns the user with the given identity.
    #[must_use]
    pub fn user(&self, id: &str) -> Option<User> {
        self.users.get(id)
    }

    /// Returns the first user whose username matches, scanning in
    /// insertion order.
    #[must_use]
    pub fn user_by_username(&self, username: &str) -> Option<User> {
        self.users.find(|u| u.username == username)
    }

    /// Creates a user with a fresh identity and a creation timestamp.
    pub fn create_user(&self, input: NewUser) -> User {
        let user = User {
            id: self.ids.next_id(),
            username: input.username,
            password: input.password,
            name: input.name,
            email: input.email,
            gpa: input.gpa,
            credits: input.credits.unwrap_or(0),
            avatar: input.avatar,
            created_at: Some(now_millis()),
        };
        debug!(kind = User::KIND, id = %user.id, "record created");
        self.users.insert(user)
    }

    // --- Courses ---

    /// Returns all courses in insertion order.
    #[must_use]
    pub fn courses(&self) -> Vec<Course> {
        self.courses.list()
    }

    /// Returns the course with the given identity.
    #[must_use]
    pub fn course(&self, id: &str) -> Option<Course> {
        self.courses.get(id)
    }

    /// Creates a course with a fresh identity and a creation timestamp.
    pub fn create_course(&self, input: NewCourse) -> Course {
        let course = Course {
            id: self.ids.next_id(),
            name: input.name,
            code: input.code,
            instructor: input.instructor,
            room: input.room,
            schedule: input.schedule,
            description: input.description,
            created_at: Some(now_millis()),
        };
        debug!(kind = Course::KIND, id = %course.id, "record created");
        self.courses.insert(course)
    }

    // --- Assessments ---

    /// Returns all assessments in insertion order.
    #[must_use]
    pub fn assessments(&self) -> Vec<Assessment> {
        self.assessments.list()
    }

    /// Returns the assessment with the given identity.
    #[must_use]
    pub fn assessment(&self, id: &str) -> Option<Assessment> {
        self.assessments.get(id)
    }

    /// Creates an assessment. `status` defaults to pending; the other
    /// omitted optionals stay absent.
    pub fn create_assessment(&self, input: NewAssessment) -> Assessment {
        let assessment = Assessment {
            id: self.ids.next_id(),
            course_id: input.course_id,
            title: input.title,
            kind: input.kind,
            due_date: input.due_date,
            total_questions: input.total_questions,
            completed_questions: input.completed_questions,
            time_remaining: input.time_remaining,
            grade: input.grade,
            status: input.status.unwrap_or_default(),
            created_at: Some(now_millis()),
        };
        debug!(kind = Assessment::KIND, id = %assessment.id, "record created");
        self.assessments.insert(assessment)
    }

    /// Merges `patch` onto the assessment with the given identity.
    ///
    /// Returns the merged snapshot, or `None` (inserting nothing) if the
    /// identity is unknown. Merged state is not validated.
    pub fn update_assessment(&self, id: &str, patch: &AssessmentPatch) -> Option<Assessment> {
        self.assessments.update_with(id, |a| patch.apply_to(a))
    }

    // --- Messages ---

    /// Returns the message with the given identity.
    #[must_use]
    pub fn message(&self, id: &str) -> Option<Message> {
        self.messages.get(id)
    }

    /// Creates a message, applying the documented defaults for the fields
    /// the caller omits.
    pub fn create_message(&self, input: NewMessage) -> Message {
        let message = Message {
            id: self.ids.next_id(),
            sender_id: input.sender_id,
            recipient_id: input.recipient_id,
            group_name: input.group_name,
            content: input.content,
            kind: input.kind.unwrap_or_default(),
            channel: input.channel,
            upvotes: input.upvotes.unwrap_or(0),
            is_admin: input.is_admin.unwrap_or(false),
            is_pinned: input.is_pinned.unwrap_or(false),
            is_read: input.is_read.unwrap_or(false),
            created_at: Some(now_millis()),
        };
        debug!(kind = Message::KIND, id = %message.id, "record created");
        self.messages.insert(message)
    }

    /// Merges `patch` onto the message with the given identity.
    pub fn update_message(&self, id: &str, patch: &MessagePatch) -> Option<Message> {
        self.messages.update_with(id, |m| patch.apply_to(m))
    }

    /// Sets the read flag on the message with the given identity.
    ///
    /// A no-op, not an error, when the identity is unknown.
    pub fn mark_message_read(&self, id: &str) {
        self.messages.update_with(id, |m| m.is_read = true);
    }

    // --- Announcements ---

    /// Creates an announcement. `priority` defaults to normal.
    pub fn create_announcement(&self, input: NewAnnouncement) -> Announcement {
        let announcement = Announcement {
            id: self.ids.next_id(),
            title: input.title,
            content: input.content,
            kind: input.kind,
            priority: input.priority.unwrap_or_default(),
            created_at: Some(now_millis()),
        };
        debug!(kind = Announcement::KIND, id = %announcement.id, "record created");
        self.announcements.insert(announcement)
    }

    // --- Campus locations ---

    /// Returns all campus locations in insertion order.
    #[must_use]
    pub fn campus_locations(&self) -> Vec<CampusLocation> {
        self.locations.list()
    }

    /// Creates a campus location. `status` defaults to open; locations
    /// carry no creation timestamp.
    pub fn create_campus_location(&self, input: NewCampusLocation) -> CampusLocation {
        let location = CampusLocation {
            id: self.ids.next_id(),
            name: input.name,
            kind: input.kind,
            coordinates: input.coordinates,
            status: input.status.unwrap_or_default(),
            description: input.description,
            hours: input.hours,
        };
        debug!(kind = CampusLocation::KIND, id = %location.id, "record created");
        self.locations.insert(location)
    }
}
