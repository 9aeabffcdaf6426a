//! Generic CRUD endpoints shared by every entity
//!
//! Each entity gets:
//! - `GET {base}` and `GET {base}/` - paginated list
//! - `POST {base}` and `POST {base}/` - create, returns the stored row
//! - `GET {base}/{id}` - fetch one
//! - `PUT {base}/{id}` - full replace

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, MethodRouter},
    Json, Router,
};

use crate::db::repos::CrudRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{EntityId, ValidJson, ValidQuery};
use crate::http::server::AppState;
use crate::models::{Entity, Pagination, PaginationParams};

/// GET {base}/?limit=&offset=
async fn list<E: Entity>(
    State(state): State<Arc<AppState>>,
    ValidQuery(params): ValidQuery<PaginationParams>,
) -> Result<Json<Vec<E>>, ApiError> {
    let rows = CrudRepo::<E>::new(&state.pool)
        .list(Pagination::from(params))
        .await?;
    Ok(Json(rows))
}

/// GET {base}/{id}
async fn fetch<E: Entity>(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<Json<E>, ApiError> {
    let row = CrudRepo::<E>::new(&state.pool).get(id).await?;
    Ok(Json(row))
}

/// POST {base}/
async fn create<E: Entity>(
    State(state): State<Arc<AppState>>,
    ValidJson(draft): ValidJson<E::Draft>,
) -> Result<Json<E>, ApiError> {
    let row = CrudRepo::<E>::new(&state.pool).create(&draft).await?;
    tracing::info!(resource = E::RESOURCE, "created");
    Ok(Json(row))
}

/// PUT {base}/{id}
async fn update<E: Entity>(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
    ValidJson(draft): ValidJson<E::Draft>,
) -> Result<Json<E>, ApiError> {
    let row = CrudRepo::<E>::new(&state.pool).update(id, &draft).await?;
    tracing::info!(resource = E::RESOURCE, id, "updated");
    Ok(Json(row))
}

/// List and create on the collection path.
pub fn collection<E: Entity>() -> MethodRouter<Arc<AppState>> {
    get(list::<E>).post(create::<E>)
}

/// Fetch and replace on the member path.
pub fn member<E: Entity>() -> MethodRouter<Arc<AppState>> {
    get(fetch::<E>).put(update::<E>)
}

/// Rows of `E` whose `parent` column equals the `{id}` path segment.
pub fn children<E: Entity>(parent: &'static str) -> MethodRouter<Arc<AppState>> {
    get(
        move |State(state): State<Arc<AppState>>, EntityId(id): EntityId| async move {
            let rows = CrudRepo::<E>::new(&state.pool)
                .list_by_parent(parent, id)
                .await?;
            Ok::<_, ApiError>(Json(rows))
        },
    )
}

/// Collection and member routes for `E` under `base`.
pub fn router<E: Entity>(base: &str) -> Router<Arc<AppState>> {
    router_with_member::<E>(base, member::<E>())
}

/// Like [`router`], with a caller-supplied member route.
pub fn router_with_member<E: Entity>(
    base: &str,
    member: MethodRouter<Arc<AppState>>,
) -> Router<Arc<AppState>> {
    Router::new()
        .route(base, collection::<E>())
        .route(&format!("{}/", base), collection::<E>())
        .route(&format!("{}/{{id}}", base), member)
}
