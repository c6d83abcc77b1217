//! Handlers for the `/admin/abouts` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::patch::patched_str;
use folio_core::types::DbId;
use folio_core::validation::validate_url;
use folio_db::models::about::{CreateAbout, UpdateAbout};
use folio_db::models::filter::ListFilter;
use folio_db::repositories::AboutRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "About", id })
}

pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(filter): Query<ListFilter>,
) -> AppResult<impl IntoResponse> {
    let abouts = AboutRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: abouts }))
}

pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateAbout>,
) -> AppResult<impl IntoResponse> {
    validate_url(input.avatar_url.as_deref(), "avatar_url")?;

    let about = AboutRepo::create(&state.pool, &input).await?;

    tracing::info!(id = about.id, is_active = about.is_active, "About created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: about })))
}

pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let about = AboutRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: about }))
}

pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAbout>,
) -> AppResult<impl IntoResponse> {
    validate_url(patched_str(&input.avatar_url), "avatar_url")?;

    let about = AboutRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(id, is_active = about.is_active, "About updated");

    Ok(Json(DataResponse { data: about }))
}

pub async fn activate(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let about = AboutRepo::activate(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(id, "About activated");

    Ok(Json(DataResponse { data: about }))
}

pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !AboutRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "About deleted");
    Ok(StatusCode::NO_CONTENT)
}
