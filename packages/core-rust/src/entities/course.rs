//! Course catalog records.

use serde::{Deserialize, Serialize};

/// Weekly meeting pattern for a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSchedule {
    /// Meeting days, e.g. `"MWF"` or `"TTh"`.
    pub day: String,
    /// Start time as `"HH:MM"`.
    pub start_time: String,
    /// End time as `"HH:MM"`.
    pub end_time: String,
}

/// A course offering.
///
/// Courses are not owned by a [`User`](crate::User) at this layer; the
/// dashboard treats the whole catalog as visible to the signed-in student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Unique identity, assigned at creation.
    pub id: String,
    /// Course title, e.g. `"Organic Chemistry"`.
    pub name: String,
    /// Catalog code, e.g. `"CHEM 301"`.
    pub code: String,
    /// Instructor display name.
    pub instructor: String,
    /// Room designation.
    pub room: String,
    /// Weekly meeting pattern.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub schedule: Option<CourseSchedule>,
    /// Free-form course description.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<i64>,
}

/// Create input for [`Course`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    /// Course title.
    pub name: String,
    /// Catalog code.
    pub code: String,
    /// Instructor display name.
    pub instructor: String,
    /// Room designation.
    pub room: String,
    /// Weekly meeting pattern.
    #[serde(default)]
    pub schedule: Option<CourseSchedule>,
    /// Free-form course description.
    #[serde(default)]
    pub description: Option<String>,
}
