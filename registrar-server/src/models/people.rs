//! Teachers and students

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::email::Email;
use super::entity::{BoundQuery, Draft, Entity};
use super::validation::{require_text, MAX_NAME_LEN};
use super::ValidationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub faculty_id: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub faculty_id: i32,
}

impl Entity for Teacher {
    const RESOURCE: &'static str = "teacher";
    const TABLE: &'static str = "teachers";
    const COLUMNS: &'static str = "id, first_name, last_name, email, faculty_id";
    const PARENTS: &'static [&'static str] = &["faculty_id"];
    type Draft = TeacherDraft;
}

impl Draft for TeacherDraft {
    const FIELDS: &'static [&'static str] = &["first_name", "last_name", "email", "faculty_id"];

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("firstName", &self.first_name, MAX_NAME_LEN)?;
        require_text("lastName", &self.last_name, MAX_NAME_LEN)
    }

    fn bind<'q, E>(&'q self, query: BoundQuery<'q, E>) -> BoundQuery<'q, E> {
        query
            .bind(&self.first_name)
            .bind(&self.last_name)
            .bind(self.email.as_str())
            .bind(self.faculty_id)
    }
}

/// Student record. `email` is unique across all students.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub group_id: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub group_id: i32,
}

impl Entity for Student {
    const RESOURCE: &'static str = "student";
    const TABLE: &'static str = "students";
    const COLUMNS: &'static str = "id, first_name, last_name, email, group_id";
    const PARENTS: &'static [&'static str] = &["group_id"];
    type Draft = StudentDraft;
}

impl Draft for StudentDraft {
    const FIELDS: &'static [&'static str] = &["first_name", "last_name", "email", "group_id"];

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("firstName", &self.first_name, MAX_NAME_LEN)?;
        require_text("lastName", &self.last_name, MAX_NAME_LEN)
    }

    fn bind<'q, E>(&'q self, query: BoundQuery<'q, E>) -> BoundQuery<'q, E> {
        query
            .bind(&self.first_name)
            .bind(&self.last_name)
            .bind(self.email.as_str())
            .bind(self.group_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_student_payload() {
        let draft: StudentDraft = serde_json::from_str(
            r#"{"firstName": "Test", "lastName": "Student", "email": "test.student@example.com", "groupId": 1}"#,
        )
        .unwrap();

        assert_eq!(draft.first_name, "Test");
        assert_eq!(draft.email.as_str(), "test.student@example.com");
        assert_eq!(draft.group_id, 1);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn invalid_email_fails_decoding() {
        let err = serde_json::from_str::<StudentDraft>(
            r#"{"firstName": "Test", "lastName": "Student", "email": "not-an-email", "groupId": 1}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("email"));
    }

    #[test]
    fn string_group_id_fails_decoding() {
        assert!(serde_json::from_str::<StudentDraft>(
            r#"{"firstName": "A", "lastName": "B", "email": "a@b.io", "groupId": "one"}"#,
        )
        .is_err());
    }

    #[test]
    fn blank_names_rejected() {
        let draft: TeacherDraft = serde_json::from_str(
            r#"{"firstName": " ", "lastName": "Teacher", "email": "t@example.com", "facultyId": 1}"#,
        )
        .unwrap();
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::Empty { field: "firstName" })
        ));
    }

    #[test]
    fn fields_match_columns() {
        assert_eq!(Student::COLUMNS, format!("id, {}", StudentDraft::FIELDS.join(", ")));
        assert_eq!(Teacher::COLUMNS, format!("id, {}", TeacherDraft::FIELDS.join(", ")));
    }
}
