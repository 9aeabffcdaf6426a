//! Repository error type and constraint classification

use sqlx::error::ErrorKind;

use crate::db::schema::describe_constraint;

/// SQLSTATE for a value too long for its column
const STRING_DATA_RIGHT_TRUNCATION: &str = "22001";

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: i32 },

    #[error("no {resource} found for {parent} '{id}'")]
    NoneFound {
        resource: &'static str,
        parent: &'static str,
        id: i32,
    },

    #[error("{}", duplicate_message(.resource, .constraint))]
    Duplicate {
        resource: &'static str,
        constraint: Option<String>,
    },

    #[error("invalid payload for {resource}: {detail}")]
    Integrity {
        resource: &'static str,
        detail: String,
    },
}

/// Which kind of rule a failed write broke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Violation {
    Unique,
    Integrity,
}

/// Map a database error kind onto the rule it represents.
pub(crate) fn classify(kind: ErrorKind) -> Option<Violation> {
    match kind {
        ErrorKind::UniqueViolation => Some(Violation::Unique),
        ErrorKind::ForeignKeyViolation | ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
            Some(Violation::Integrity)
        }
        _ => None,
    }
}

fn duplicate_message(resource: &str, constraint: &Option<String>) -> String {
    constraint
        .as_deref()
        .and_then(describe_constraint)
        .map(str::to_owned)
        .unwrap_or_else(|| format!("{} already exists", resource))
}

impl DbError {
    pub fn not_found(resource: &'static str, id: i32) -> Self {
        Self::NotFound { resource, id }
    }

    /// Classify a failed insert, update or delete.
    ///
    /// Constraint failures become `Duplicate` / `Integrity`; everything else
    /// stays a raw `Sqlx` error.
    pub fn from_write(resource: &'static str, err: sqlx::Error) -> Self {
        let sqlx::Error::Database(db_err) = &err else {
            return Self::Sqlx(err);
        };

        let violation = classify(db_err.kind()).or_else(|| {
            (db_err.code().as_deref() == Some(STRING_DATA_RIGHT_TRUNCATION))
                .then_some(Violation::Integrity)
        });

        match violation {
            Some(Violation::Unique) => {
                tracing::debug!(resource, constraint = db_err.constraint(), "unique violation");
                Self::Duplicate {
                    resource,
                    constraint: db_err.constraint().map(str::to_owned),
                }
            }
            Some(Violation::Integrity) => {
                tracing::debug!(resource, constraint = db_err.constraint(), "integrity violation");
                Self::Integrity {
                    resource,
                    detail: db_err.message().to_owned(),
                }
            }
            None => Self::Sqlx(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_constraint_kinds() {
        assert_eq!(classify(ErrorKind::UniqueViolation), Some(Violation::Unique));
        assert_eq!(classify(ErrorKind::ForeignKeyViolation), Some(Violation::Integrity));
        assert_eq!(classify(ErrorKind::NotNullViolation), Some(Violation::Integrity));
        assert_eq!(classify(ErrorKind::CheckViolation), Some(Violation::Integrity));
        assert_eq!(classify(ErrorKind::Other), None);
    }

    #[test]
    fn duplicate_uses_constraint_message() {
        let err = DbError::Duplicate {
            resource: "student",
            constraint: Some("students_email_key".into()),
        };
        assert_eq!(err.to_string(), "student with this email already exists");

        let err = DbError::Duplicate {
            resource: "grade",
            constraint: None,
        };
        assert_eq!(err.to_string(), "grade already exists");
    }

    #[test]
    fn not_found_display() {
        assert_eq!(
            DbError::not_found("student", 99).to_string(),
            "student '99' not found"
        );
        assert!(matches!(
            DbError::not_found("course", 7),
            DbError::NotFound { resource: "course", id: 7 }
        ));
        let err = DbError::NoneFound {
            resource: "students",
            parent: "course",
            id: 4,
        };
        assert_eq!(err.to_string(), "no students found for course '4'");
    }

    #[test]
    fn non_database_errors_pass_through() {
        let err = DbError::from_write("student", sqlx::Error::RowNotFound);
        assert!(matches!(err, DbError::Sqlx(sqlx::Error::RowNotFound)));
    }
}
