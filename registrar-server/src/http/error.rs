//! API error types with IntoResponse
//!
//! | Variant | Status |
//! |---|---|
//! | `Validation` | 422 |
//! | `NotFound` | 404 |
//! | `Conflict` | 409 |
//! | `InvalidPayload` | 400 |
//! | `Database` | 500, logged |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Input failed decoding or field checks (422)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { message: String },

    /// Uniqueness rule violated (409)
    Conflict { message: String },

    /// Foreign key or other constraint rejected the write (400)
    InvalidPayload { message: String },

    /// Unclassified database error (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "error": "validation_error",
                    "message": e.to_string()
                }),
            ),
            Self::NotFound { message } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": message
                }),
            ),
            Self::Conflict { message } => (
                StatusCode::CONFLICT,
                json!({
                    "error": "conflict",
                    "message": message
                }),
            ),
            Self::InvalidPayload { message } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "invalid_payload",
                    "message": message
                }),
            ),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": "an internal error occurred"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { .. } | DbError::NoneFound { .. } => Self::NotFound {
                message: e.to_string(),
            },
            DbError::Duplicate { .. } => Self::Conflict {
                message: e.to_string(),
            },
            DbError::Integrity { .. } => Self::InvalidPayload {
                message: e.to_string(),
            },
            DbError::Sqlx(_) => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_422() {
        let err = ApiError::Validation(ValidationError::Empty { field: "name" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["message"], "name cannot be empty");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let err = ApiError::from(DbError::not_found("student", 7));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["message"], "student '7' not found");
    }

    #[tokio::test]
    async fn no_students_is_404() {
        let err = ApiError::from(DbError::NoneFound {
            resource: "students",
            parent: "course",
            id: 3,
        });
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn duplicate_is_409() {
        let err = ApiError::from(DbError::Duplicate {
            resource: "course",
            constraint: Some("courses_name_teacher_id_key".into()),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = body_json(response).await;
        assert_eq!(
            body["message"],
            "course with this name and teacher id already exists"
        );
    }

    #[tokio::test]
    async fn integrity_is_400() {
        let err = ApiError::from(DbError::Integrity {
            resource: "grade",
            detail: "violates foreign key constraint \"grades_student_id_fkey\"".into(),
        });
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn database_error_is_500_without_details() {
        let err = ApiError::from(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], "an internal error occurred");
    }
}
