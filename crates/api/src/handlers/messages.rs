//! Handlers for the `/admin/messages` inbox. Messages are created only
//! through the public contact endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use folio_core::types::DbId;
use folio_db::repositories::MessageRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::PaginationParams;
use crate::response::{DataResponse, Page};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Message",
        id,
    })
}

/// GET /api/v1/admin/messages?limit=&offset=
///
/// Newest first.
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
    let offset = clamp_offset(params.offset);

    let items = MessageRepo::list(&state.pool, limit, offset).await?;
    let total = MessageRepo::count(&state.pool).await?;

    Ok(Json(DataResponse {
        data: Page {
            items,
            total,
            limit,
            offset,
        },
    }))
}

pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let message = MessageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: message }))
}

pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !MessageRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Message deleted");
    Ok(StatusCode::NO_CONTENT)
}
