//! Handlers for the `/admin/processes` resource.
//!
//! Several processes may be active; the page renders the one with the lowest id.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::patch::patched_str;
use folio_core::types::DbId;
use folio_core::validation::validate_short_text;
use folio_db::models::filter::ListFilter;
use folio_db::models::process::{CreateProcess, StepFilter, UpdateProcess};
use folio_db::repositories::{ProcessRepo, StepRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Process",
        id,
    })
}

/// GET /api/v1/admin/processes?is_active=&q=
///
/// Each process carries `active_step_count`.
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(filter): Query<ListFilter>,
) -> AppResult<impl IntoResponse> {
    let processes = ProcessRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: processes }))
}

pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateProcess>,
) -> AppResult<impl IntoResponse> {
    validate_short_text(input.description.as_deref(), "description")?;

    let process = ProcessRepo::create(&state.pool, &input).await?;

    tracing::info!(id = process.id, "Process created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: process })))
}

pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let process = ProcessRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: process }))
}

pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProcess>,
) -> AppResult<impl IntoResponse> {
    validate_short_text(patched_str(&input.description), "description")?;

    let process = ProcessRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(id, "Process updated");

    Ok(Json(DataResponse { data: process }))
}

/// Steps of the process survive the deletion with their process cleared.
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ProcessRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Process deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/admin/processes/{id}/steps
pub async fn list_steps(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<ListFilter>,
) -> AppResult<impl IntoResponse> {
    ProcessRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let filter = StepFilter {
        is_active: params.is_active,
        process_id: Some(id),
        q: params.q,
    };
    let steps = StepRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: steps }))
}
