//! Service status endpoint
//!
//! GET /api/v1/status - reports whether the database answers a trivial query.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub database: bool,
    pub pool_size: u32,
    pub idle_connections: usize,
}

/// GET /status
async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let database = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = %e, "database unreachable");
            false
        }
    };

    Json(StatusResponse {
        status: if database { "ok" } else { "degraded" },
        database,
        pool_size: state.pool.size(),
        idle_connections: state.pool.num_idle(),
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/status", get(status))
}
