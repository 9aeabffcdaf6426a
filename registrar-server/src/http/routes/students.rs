//! Student endpoints
//!
//! Students are the only entity with a delete route.

use std::sync::Arc;

use axum::{extract::State, Json, Router};

use super::resources;
use crate::db::repos::StudentRepo;
use crate::http::error::ApiError;
use crate::http::extractors::EntityId;
use crate::http::server::AppState;
use crate::models::{Grade, Student};

/// DELETE /students/{id} - returns the removed student
async fn delete_student(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<Json<Student>, ApiError> {
    let student = StudentRepo::new(&state.pool).delete(id).await?;
    Ok(Json(student))
}

/// Student routes
pub fn router() -> Router<Arc<AppState>> {
    let member = resources::member::<Student>().delete(delete_student);

    resources::router_with_member::<Student>("/students", member)
        .route("/students/{id}/grades", resources::children::<Grade>("student_id"))
}
