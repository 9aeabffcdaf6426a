//! Schema management: create, seed and drop every table
//!
//! The scripts are embedded at compile time. `apply_migrations` is only
//! idempotent after `drop_all`; a failed script leaves the schema in an
//! undefined state and must be retried from a clean drop.

use sqlx::PgPool;

use crate::error::{Error, Result};

const CREATE_TABLES: &str = include_str!("../../sql/create_tables.sql");
const FILL_DB: &str = include_str!("../../sql/fill_db.sql");
const DROP_ALL_TABLES: &str = include_str!("../../sql/drop_all_tables.sql");

/// Every table, in creation order.
pub const TABLES: [&str; 15] = [
    "faculties",
    "buildings",
    "departments",
    "classrooms",
    "teachers",
    "semesters",
    "courses",
    "course_programs",
    "groups",
    "study_plans",
    "students",
    "assignments",
    "exams",
    "schedules",
    "grades",
];

/// Named unique constraints and the conflict message each one produces.
const UNIQUE_CONSTRAINTS: [(&str, &str); 3] = [
    ("students_email_key", "student with this email already exists"),
    (
        "courses_name_teacher_id_key",
        "course with this name and teacher id already exists",
    ),
    (
        "grades_student_id_course_id_key",
        "grade with this student id and course id already exists",
    ),
];

/// Create all tables in dependency order.
pub async fn apply_migrations(pool: &PgPool) -> Result<()> {
    run_script(pool, "create_tables", CREATE_TABLES).await
}

/// Insert the deterministic fixture rows.
pub async fn seed_fixtures(pool: &PgPool) -> Result<()> {
    run_script(pool, "fill_db", FILL_DB).await
}

/// Drop every table.
pub async fn drop_all(pool: &PgPool) -> Result<()> {
    run_script(pool, "drop_all_tables", DROP_ALL_TABLES).await
}

/// Drop, recreate and optionally seed the schema.
pub async fn reset(pool: &PgPool, seed: bool) -> Result<()> {
    drop_all(pool).await?;
    apply_migrations(pool).await?;
    if seed {
        seed_fixtures(pool).await?;
    }
    Ok(())
}

/// Conflict message for a named unique constraint, if it is one of ours.
pub fn describe_constraint(name: &str) -> Option<&'static str> {
    UNIQUE_CONSTRAINTS
        .iter()
        .find(|(constraint, _)| *constraint == name)
        .map(|(_, message)| *message)
}

async fn run_script(pool: &PgPool, script: &'static str, sql: &'static str) -> Result<()> {
    tracing::info!(script, "Running schema script");

    sqlx::raw_sql(sql)
        .execute(pool)
        .await
        .map_err(|source| Error::Migration { script, source })?;

    tracing::info!(script, "Schema script complete");
    Ok(())
}
