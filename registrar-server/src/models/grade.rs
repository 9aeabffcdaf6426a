//! Grades: one record per (student, course)

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::entity::{BoundQuery, Draft, Entity};
use super::ValidationError;

/// A student's grade for a course. `(studentId, courseId)` is unique, so
/// updating replaces the value in place rather than adding a second record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub id: i32,
    pub grade: i32,
    pub student_id: i32,
    pub course_id: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeDraft {
    pub grade: i32,
    pub student_id: i32,
    pub course_id: i32,
}

impl Entity for Grade {
    const RESOURCE: &'static str = "grade";
    const TABLE: &'static str = "grades";
    const COLUMNS: &'static str = "id, grade, student_id, course_id";
    const PARENTS: &'static [&'static str] = &["student_id", "course_id"];
    type Draft = GradeDraft;
}

impl Draft for GradeDraft {
    const FIELDS: &'static [&'static str] = &["grade", "student_id", "course_id"];

    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    fn bind<'q, E>(&'q self, query: BoundQuery<'q, E>) -> BoundQuery<'q, E> {
        query
            .bind(self.grade)
            .bind(self.student_id)
            .bind(self.course_id)
    }
}
