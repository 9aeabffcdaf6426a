//! HTTP route handlers

pub mod courses;
pub mod health;
pub mod resources;
pub mod status;
pub mod students;

use std::sync::Arc;

use axum::Router;

use self::resources::{children, router};
use crate::http::server::AppState;
use crate::models::{
    Assignment, Building, Classroom, Course, CourseProgram, Department, Exam, Faculty, Grade,
    Group, Schedule, Semester, Student, StudyPlan, Teacher,
};

/// Every route mounted under `/api/v1`.
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(router::<Faculty>("/faculties"))
        .merge(router::<Building>("/buildings"))
        .merge(router::<Department>("/departments"))
        .merge(router::<Classroom>("/classrooms"))
        .merge(router::<Teacher>("/teachers"))
        .merge(router::<Semester>("/semesters"))
        .merge(courses::router())
        .merge(router::<CourseProgram>("/course-programs"))
        .merge(router::<Group>("/groups"))
        .merge(router::<StudyPlan>("/study-plans"))
        .merge(students::router())
        .merge(router::<Assignment>("/assignments"))
        .merge(router::<Exam>("/exams"))
        .merge(router::<Schedule>("/schedules"))
        .merge(router::<Grade>("/grades"))
        .route("/faculties/{id}/departments", children::<Department>("faculty_id"))
        .route("/faculties/{id}/teachers", children::<Teacher>("faculty_id"))
        .route("/buildings/{id}/classrooms", children::<Classroom>("building_id"))
        .route("/teachers/{id}/courses", children::<Course>("teacher_id"))
        .route("/groups/{id}/students", children::<Student>("group_id"))
        .merge(status::router())
}
