//! Course resource handlers, including the per-course assessment view.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use campushub_core::{Assessment, Course, NewCourse};

use super::AppState;
use crate::network::ApiError;
use crate::storage::Keyed;

/// `GET /api/courses` -- the whole catalog, insertion order.
pub async fn list_courses(State(state): State<AppState>) -> Json<Vec<Course>> {
    Json(state.store.courses())
}

/// `GET /api/courses/{id}`
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Course>, ApiError> {
    state
        .store
        .course(&id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found(Course::KIND, id))
}

/// `POST /api/courses`
pub async fn create_course(
    State(state): State<AppState>,
    Json(input): Json<NewCourse>,
) -> (StatusCode, Json<Course>) {
    (StatusCode::CREATED, Json(state.store.create_course(input)))
}

/// `GET /api/courses/{id}/assessments` -- every assessment referencing the
/// course, insertion order.
///
/// An unknown or unreferenced course id yields an empty list, not a 404;
/// course ids on assessments are never validated, so absence here is
/// indistinguishable from "no assessments yet".
pub async fn course_assessments(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<Vec<Assessment>> {
    Json(state.store.assessments_by_course(&id))
}

#[cfg(test)]
mod tests {
    use super::super::test_state;
    use super::*;

    use campushub_core::{AssessmentType, NewAssessment};

    fn new_course(code: &str) -> NewCourse {
        NewCourse {
            name: "Organic Chemistry".to_string(),
            code: code.to_string(),
            instructor: "Prof. Johnson".to_string(),
            room: "Science 204".to_string(),
            schedule: None,
            description: None,
        }
    }

    #[tokio::test]
    async fn create_list_get_round_trip() {
        let state = test_state();
        let (status, created) = create_course(State(state.clone()), Json(new_course("CHEM 301"))).await;
        assert_eq!(status, StatusCode::CREATED);

        let listed = list_courses(State(state.clone())).await;
        assert_eq!(listed.0, vec![created.0.clone()]);

        let fetched = get_course(State(state), Path(created.0.id.clone()))
            .await
            .expect("course exists");
        assert_eq!(fetched.0, created.0);
    }

    #[tokio::test]
    async fn unknown_course_is_not_found() {
        let state = test_state();
        assert!(get_course(State(state), Path("ghost".to_string()))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn course_assessments_filters_and_tolerates_unknown_course() {
        let state = test_state();
        let (_, course) = create_course(State(state.clone()), Json(new_course("MATH 202"))).await;
        state.store.create_assessment(NewAssessment {
            course_id: course.0.id.clone(),
            title: "Chapter 7 Quiz".to_string(),
            kind: AssessmentType::Quiz,
            due_date: None,
            total_questions: None,
            completed_questions: None,
            time_remaining: None,
            grade: None,
            status: None,
        });
        state.store.create_assessment(NewAssessment {
            course_id: "other-course".to_string(),
            title: "Unrelated".to_string(),
            kind: AssessmentType::Exam,
            due_date: None,
            total_questions: None,
            completed_questions: None,
            time_remaining: None,
            grade: None,
            status: None,
        });

        let for_course = course_assessments(State(state.clone()), Path(course.0.id)).await;
        assert_eq!(for_course.0.len(), 1);
        assert_eq!(for_course.0[0].title, "Chapter 7 Quiz");

        // Unknown course: empty list, not an error.
        let empty = course_assessments(State(state), Path("ghost".to_string())).await;
        assert!(empty.0.is_empty());
    }
}
