//! Semesters, courses, course programs, groups and study plans

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::entity::{BoundQuery, Draft, Entity};
use super::validation::{require_present, require_text, MAX_NAME_LEN};
use super::ValidationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Semester {
    pub id: i32,
    pub year: i32,
    pub semester: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterDraft {
    pub year: i32,
    pub semester: i32,
}

impl Entity for Semester {
    const RESOURCE: &'static str = "semester";
    const TABLE: &'static str = "semesters";
    const COLUMNS: &'static str = "id, year, semester";
    type Draft = SemesterDraft;
}

impl Draft for SemesterDraft {
    const FIELDS: &'static [&'static str] = &["year", "semester"];

    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    fn bind<'q, E>(&'q self, query: BoundQuery<'q, E>) -> BoundQuery<'q, E> {
        query.bind(self.year).bind(self.semester)
    }
}

/// Course taught by one teacher. `(name, teacherId)` is unique.
///
/// Deleting a course removes its groups (and through them their students)
/// and every grade recorded for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub teacher_id: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    pub name: String,
    pub teacher_id: i32,
}

impl Entity for Course {
    const RESOURCE: &'static str = "course";
    const TABLE: &'static str = "courses";
    const COLUMNS: &'static str = "id, name, teacher_id";
    const PARENTS: &'static [&'static str] = &["teacher_id"];
    type Draft = CourseDraft;
}

impl Draft for CourseDraft {
    const FIELDS: &'static [&'static str] = &["name", "teacher_id"];

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name, MAX_NAME_LEN)
    }

    fn bind<'q, E>(&'q self, query: BoundQuery<'q, E>) -> BoundQuery<'q, E> {
        query.bind(&self.name).bind(self.teacher_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CourseProgram {
    pub id: i32,
    pub description: String,
    pub course_id: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseProgramDraft {
    pub description: String,
    pub course_id: i32,
}

impl Entity for CourseProgram {
    const RESOURCE: &'static str = "course program";
    const TABLE: &'static str = "course_programs";
    const COLUMNS: &'static str = "id, description, course_id";
    const PARENTS: &'static [&'static str] = &["course_id"];
    type Draft = CourseProgramDraft;
}

impl Draft for CourseProgramDraft {
    const FIELDS: &'static [&'static str] = &["description", "course_id"];

    fn validate(&self) -> Result<(), ValidationError> {
        require_present("description", &self.description)
    }

    fn bind<'q, E>(&'q self, query: BoundQuery<'q, E>) -> BoundQuery<'q, E> {
        query.bind(&self.description).bind(self.course_id)
    }
}

/// Student group attached to a department and a course.
/// Deleting a group removes its students.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: i32,
    pub name: String,
    pub department_id: i32,
    pub course_id: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDraft {
    pub name: String,
    pub department_id: i32,
    pub course_id: i32,
}

impl Entity for Group {
    const RESOURCE: &'static str = "group";
    const TABLE: &'static str = "groups";
    const COLUMNS: &'static str = "id, name, department_id, course_id";
    const PARENTS: &'static [&'static str] = &["department_id", "course_id"];
    type Draft = GroupDraft;
}

impl Draft for GroupDraft {
    const FIELDS: &'static [&'static str] = &["name", "department_id", "course_id"];

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name, MAX_NAME_LEN)
    }

    fn bind<'q, E>(&'q self, query: BoundQuery<'q, E>) -> BoundQuery<'q, E> {
        query
            .bind(&self.name)
            .bind(self.department_id)
            .bind(self.course_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlan {
    pub id: i32,
    pub description: String,
    pub semester_id: i32,
    pub course_id: i32,
    pub group_id: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlanDraft {
    pub description: String,
    pub semester_id: i32,
    pub course_id: i32,
    pub group_id: i32,
}

impl Entity for StudyPlan {
    const RESOURCE: &'static str = "study plan";
    const TABLE: &'static str = "study_plans";
    const COLUMNS: &'static str = "id, description, semester_id, course_id, group_id";
    const PARENTS: &'static [&'static str] = &["semester_id", "course_id", "group_id"];
    type Draft = StudyPlanDraft;
}

impl Draft for StudyPlanDraft {
    const FIELDS: &'static [&'static str] = &["description", "semester_id", "course_id", "group_id"];

    fn validate(&self) -> Result<(), ValidationError> {
        require_present("description", &self.description)
    }

    fn bind<'q, E>(&'q self, query: BoundQuery<'q, E>) -> BoundQuery<'q, E> {
        query
            .bind(&self.description)
            .bind(self.semester_id)
            .bind(self.course_id)
            .bind(self.group_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_payload() {
        let draft: CourseDraft =
            serde_json::from_str(r#"{"name": "New test course", "teacherId": 1}"#).unwrap();
        assert_eq!(draft.name, "New test course");
        assert_eq!(draft.teacher_id, 1);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn course_requires_teacher() {
        assert!(serde_json::from_str::<CourseDraft>(r#"{"name": "Orphan"}"#).is_err());
    }

    #[test]
    fn blank_description_rejected() {
        let draft = StudyPlanDraft {
            description: String::new(),
            semester_id: 1,
            course_id: 1,
            group_id: 1,
        };
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::Empty { field: "description" })
        ));
    }

    #[test]
    fn fields_match_columns() {
        assert_eq!(Course::COLUMNS, format!("id, {}", CourseDraft::FIELDS.join(", ")));
        assert_eq!(Group::COLUMNS, format!("id, {}", GroupDraft::FIELDS.join(", ")));
        assert_eq!(StudyPlan::COLUMNS, format!("id, {}", StudyPlanDraft::FIELDS.join(", ")));
        assert_eq!(Semester::COLUMNS, format!("id, {}", SemesterDraft::FIELDS.join(", ")));
        assert_eq!(
            CourseProgram::COLUMNS,
            format!("id, {}", CourseProgramDraft::FIELDS.join(", "))
        );
    }
}
