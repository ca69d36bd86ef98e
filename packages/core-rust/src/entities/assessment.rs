//! Assessment records: quizzes, exams, and assignments tied to a course.

use serde::{Deserialize, Serialize};

/// The kind of assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentType {
    /// Timed in-dashboard quiz.
    Quiz,
    /// Proctored exam.
    Exam,
    /// Take-home assignment with a due date.
    Assignment,
}

/// Lifecycle state of an assessment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentStatus {
    /// Not yet started. The default for newly created assessments.
    #[default]
    Pending,
    /// In progress (e.g. a live quiz with time remaining).
    Active,
    /// Submitted, awaiting a grade.
    Completed,
    /// Grade assigned.
    Graded,
}

/// An assessment belonging to a course.
///
/// `course_id` is not validated against the course collection; dangling
/// references are tolerated, matching the original backend.
/// `completed_questions <= total_questions` is expected but unenforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    /// Unique identity, assigned at creation.
    pub id: String,
    /// Identity of the course this assessment belongs to.
    pub course_id: String,
    /// Display title.
    pub title: String,
    /// Assessment kind.
    #[serde(rename = "type")]
    pub kind: AssessmentType,
    /// Due time in milliseconds since the Unix epoch.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub due_date: Option<i64>,
    /// Total number of questions.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub total_questions: Option<i32>,
    /// Questions answered so far.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub completed_questions: Option<i32>,
    /// Minutes remaining on a live quiz.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub time_remaining: Option<i32>,
    /// Assigned grade as display text (e.g. `"94%"`).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub grade: Option<String>,
    /// Lifecycle state.
    pub status: AssessmentStatus,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<i64>,
}

/// Create input for [`Assessment`].
///
/// `status` defaults to [`AssessmentStatus::Pending`] when absent. All other
/// optionals stay absent rather than being defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssessment {
    /// Identity of the owning course. Not checked for existence.
    pub course_id: String,
    /// Display title.
    pub title: String,
    /// Assessment kind.
    #[serde(rename = "type")]
    pub kind: AssessmentType,
    /// Due time in milliseconds since the Unix epoch.
    #[serde(default)]
    pub due_date: Option<i64>,
    /// Total number of questions.
    #[serde(default)]
    pub total_questions: Option<i32>,
    /// Questions answered so far.
    #[serde(default)]
    pub completed_questions: Option<i32>,
    /// Minutes remaining on a live quiz.
    #[serde(default)]
    pub time_remaining: Option<i32>,
    /// Assigned grade as display text.
    #[serde(default)]
    pub grade: Option<String>,
    /// Lifecycle state; the store defaults this to pending.
    #[serde(default)]
    pub status: Option<AssessmentStatus>,
}

/// Partial update for [`Assessment`].
///
/// Lists exactly the update-eligible fields. A `Some` overwrites the stored
/// value; a `None` leaves it untouched. There is deliberately no way to
/// clear a field back to absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentPatch {
    /// New due time.
    #[serde(default)]
    pub due_date: Option<i64>,
    /// New question total.
    #[serde(default)]
    pub total_questions: Option<i32>,
    /// New progress count. Not checked against `total_questions`.
    #[serde(default)]
    pub completed_questions: Option<i32>,
    /// New minutes-remaining value.
    #[serde(default)]
    pub time_remaining: Option<i32>,
    /// New grade text.
    #[serde(default)]
    pub grade: Option<String>,
    /// New lifecycle state.
    #[serde(default)]
    pub status: Option<AssessmentStatus>,
}

impl AssessmentPatch {
    /// Merges this patch onto `assessment`, overwriting exactly the fields
    /// that are `Some` and retaining everything else.
    pub fn apply_to(&self, assessment: &mut Assessment) {
        if let Some(due_date) = self.due_date {
            assessment.due_date = Some(due_date);
        }
        if let Some(total) = self.total_questions {
            assessment.total_questions = Some(total);
        }
        if let Some(completed) = self.completed_questions {
            assessment.completed_questions = Some(completed);
        }
        if let Some(remaining) = self.time_remaining {
            assessment.time_remaining = Some(remaining);
        }
        if let Some(ref grade) = self.grade {
            assessment.grade = Some(grade.clone());
        }
        if let Some(status) = self.status {
            assessment.status = status;
        }
    }
}
