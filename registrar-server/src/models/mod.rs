//! Domain models with validation at the boundary
//!
//! Each entity has a row type (what the database returns, serialized to
//! clients) and a draft type (every writable field, used by both create and
//! full-replace update). Drafts are validated before they reach the database.

pub mod calendar;
pub mod curriculum;
pub mod email;
pub mod entity;
pub mod grade;
pub mod organization;
pub mod pagination;
pub mod people;
pub mod validation;

pub use calendar::{Assignment, AssignmentDraft, Exam, ExamDraft, Schedule, ScheduleDraft};
pub use curriculum::{
    Course, CourseDraft, CourseProgram, CourseProgramDraft, Group, GroupDraft, Semester,
    SemesterDraft, StudyPlan, StudyPlanDraft,
};
pub use email::Email;
pub use entity::{BoundQuery, Draft, Entity};
pub use grade::{Grade, GradeDraft};
pub use organization::{
    Building, BuildingDraft, Classroom, ClassroomDraft, Department, DepartmentDraft, Faculty,
    FacultyDraft,
};
pub use pagination::{Pagination, PaginationParams};
pub use people::{Student, StudentDraft, Teacher, TeacherDraft};
pub use validation::ValidationError;
