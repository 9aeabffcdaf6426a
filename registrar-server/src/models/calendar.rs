//! Assignments, exams and schedule slots

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::entity::{BoundQuery, Draft, Entity};
use super::validation::require_present;
use super::ValidationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: i32,
    pub description: String,
    pub date_assigned: NaiveDate,
    pub due_date: NaiveDate,
    pub course_id: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDraft {
    pub description: String,
    pub date_assigned: NaiveDate,
    pub due_date: NaiveDate,
    pub course_id: i32,
}

impl Entity for Assignment {
    const RESOURCE: &'static str = "assignment";
    const TABLE: &'static str = "assignments";
    const COLUMNS: &'static str = "id, description, date_assigned, due_date, course_id";
    const PARENTS: &'static [&'static str] = &["course_id"];
    type Draft = AssignmentDraft;
}

impl Draft for AssignmentDraft {
    const FIELDS: &'static [&'static str] = &["description", "date_assigned", "due_date", "course_id"];

    fn validate(&self) -> Result<(), ValidationError> {
        require_present("description", &self.description)
    }

    fn bind<'q, E>(&'q self, query: BoundQuery<'q, E>) -> BoundQuery<'q, E> {
        query
            .bind(&self.description)
            .bind(self.date_assigned)
            .bind(self.due_date)
            .bind(self.course_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    pub id: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub course_id: i32,
    pub classroom_id: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamDraft {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub course_id: i32,
    pub classroom_id: i32,
}

impl Entity for Exam {
    const RESOURCE: &'static str = "exam";
    const TABLE: &'static str = "exams";
    const COLUMNS: &'static str = "id, date, time, course_id, classroom_id";
    const PARENTS: &'static [&'static str] = &["course_id", "classroom_id"];
    type Draft = ExamDraft;
}

impl Draft for ExamDraft {
    const FIELDS: &'static [&'static str] = &["date", "time", "course_id", "classroom_id"];

    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    fn bind<'q, E>(&'q self, query: BoundQuery<'q, E>) -> BoundQuery<'q, E> {
        query
            .bind(self.date)
            .bind(self.time)
            .bind(self.course_id)
            .bind(self.classroom_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub course_id: i32,
    pub classroom_id: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDraft {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub course_id: i32,
    pub classroom_id: i32,
}

impl Entity for Schedule {
    const RESOURCE: &'static str = "schedule";
    const TABLE: &'static str = "schedules";
    const COLUMNS: &'static str = "id, date, time, course_id, classroom_id";
    const PARENTS: &'static [&'static str] = &["course_id", "classroom_id"];
    type Draft = ScheduleDraft;
}

impl Draft for ScheduleDraft {
    const FIELDS: &'static [&'static str] = &["date", "time", "course_id", "classroom_id"];

    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    fn bind<'q, E>(&'q self, query: BoundQuery<'q, E>) -> BoundQuery<'q, E> {
        query
            .bind(self.date)
            .bind(self.time)
            .bind(self.course_id)
            .bind(self.classroom_id)
    }
}
