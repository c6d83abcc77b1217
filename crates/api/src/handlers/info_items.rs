//! Handlers for the `/admin/info-items` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::patch::patched_str;
use folio_core::types::DbId;
use folio_core::validation::{validate_short_text, validate_url};
use folio_db::models::get_in_touch::{ContactChildFilter, CreateInfoItem, UpdateInfoItem};
use folio_db::repositories::InfoItemRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "InfoItem",
        id,
    })
}

fn validate_fields(key: Option<&str>, link: Option<&str>) -> Result<(), CoreError> {
    validate_short_text(key, "key")?;
    validate_url(link, "link")
}

/// GET /api/v1/admin/info-items?is_active=&get_in_touch_id=
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(filter): Query<ContactChildFilter>,
) -> AppResult<impl IntoResponse> {
    let items = InfoItemRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: items }))
}

pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateInfoItem>,
) -> AppResult<impl IntoResponse> {
    validate_fields(input.key.as_deref(), input.link.as_deref())?;

    let item = InfoItemRepo::create(&state.pool, &input).await?;

    tracing::info!(id = item.id, get_in_touch_id = ?item.get_in_touch_id, "Info item created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = InfoItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: item }))
}

pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInfoItem>,
) -> AppResult<impl IntoResponse> {
    validate_fields(patched_str(&input.key), patched_str(&input.link))?;

    let item = InfoItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(id, "Info item updated");

    Ok(Json(DataResponse { data: item }))
}

pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !InfoItemRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Info item deleted");
    Ok(StatusCode::NO_CONTENT)
}
