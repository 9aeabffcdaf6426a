//! Student-specific operations
//!
//! - delete: removes the student and, through the schema cascade, its grades
//! - list_for_course: students enrolled through any group of a course

use sqlx::PgPool;

use super::{CrudRepo, DbError};
use crate::models::Student;

/// Student repository
pub struct StudentRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> StudentRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Delete a student and every grade recorded for them.
    pub async fn delete(&self, id: i32) -> Result<Student, DbError> {
        let student = CrudRepo::<Student>::new(self.pool).delete(id).await?;
        tracing::info!(student_id = student.id, "student deleted with their grades");
        Ok(student)
    }

    /// Students in any group attached to the course.
    ///
    /// Returns `NotFound` when the course does not exist and `NoneFound`
    /// when it exists but nobody is enrolled.
    pub async fn list_for_course(&self, course_id: i32) -> Result<Vec<Student>, DbError> {
        let course_exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM courses WHERE id = $1)")
                .bind(course_id)
                .fetch_one(self.pool)
                .await?;

        if !course_exists.0 {
            return Err(DbError::not_found("course", course_id));
        }

        // A student belongs to exactly one group, so the join cannot repeat rows
        let students: Vec<Student> = sqlx::query_as(
            r#"
            SELECT s.id, s.first_name, s.last_name, s.email, s.group_id
            FROM students s
            JOIN groups g ON g.id = s.group_id
            WHERE g.course_id = $1
            ORDER BY s.id
            "#,
        )
        .bind(course_id)
        .fetch_all(self.pool)
        .await?;

        if students.is_empty() {
            return Err(DbError::NoneFound {
                resource: "students",
                parent: "course",
                id: course_id,
            });
        }

        Ok(students)
    }
}
