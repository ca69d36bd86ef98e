//! `CampusHub` Core — entity model for the student-portal backend.
//!
//! Defines the six entity kinds held by the record store (`User`, `Course`,
//! `Assessment`, `Message`, `Announcement`, `CampusLocation`), together with
//! the create-input structs consumed by `create` operations and the patch
//! structs consumed by partial updates. All wire types serialize to JSON
//! with camelCase field names to match the dashboard client.

pub mod entities;

pub use entities::announcement::{Announcement, AnnouncementType, NewAnnouncement, Priority};
pub use entities::assessment::{
    Assessment, AssessmentPatch, AssessmentStatus, AssessmentType, NewAssessment,
};
pub use entities::course::{Course, CourseSchedule, NewCourse};
pub use entities::location::{
    CampusLocation, Coordinates, LocationStatus, LocationType, NewCampusLocation,
};
pub use entities::message::{Message, MessagePatch, MessageType, NewMessage};
pub use entities::user::{NewUser, User};
