//! Course endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use super::resources::{self, children};
use crate::db::repos::StudentRepo;
use crate::http::error::ApiError;
use crate::http::extractors::EntityId;
use crate::http::server::AppState;
use crate::models::{Assignment, Course, CourseProgram, Exam, Grade, Group, Schedule, Student};

/// GET /courses/{id}/students - students enrolled through the course's groups
///
/// 404 both when the course is missing and when nobody is enrolled.
async fn course_students(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<Json<Vec<Student>>, ApiError> {
    let students = StudentRepo::new(&state.pool).list_for_course(id).await?;
    Ok(Json(students))
}

/// Course routes
pub fn router() -> Router<Arc<AppState>> {
    resources::router::<Course>("/courses")
        .route("/courses/{id}/students", get(course_students))
        .route("/courses/{id}/grades", children::<Grade>("course_id"))
        .route("/courses/{id}/groups", children::<Group>("course_id"))
        .route("/courses/{id}/programs", children::<CourseProgram>("course_id"))
        .route("/courses/{id}/assignments", children::<Assignment>("course_id"))
        .route("/courses/{id}/exams", children::<Exam>("course_id"))
        .route("/courses/{id}/schedules", children::<Schedule>("course_id"))
}
