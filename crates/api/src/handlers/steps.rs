//! Handlers for the `/admin/steps` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::patch::patched_str;
use folio_core::types::DbId;
use folio_core::validation::validate_short_text;
use folio_db::models::process::{CreateStep, StepFilter, UpdateStep};
use folio_db::repositories::StepRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Step", id })
}

/// GET /api/v1/admin/steps?is_active=&process_id=&q=
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(filter): Query<StepFilter>,
) -> AppResult<impl IntoResponse> {
    let steps = StepRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: steps }))
}

pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateStep>,
) -> AppResult<impl IntoResponse> {
    validate_short_text(input.title.as_deref(), "title")?;

    let step = StepRepo::create(&state.pool, &input).await?;

    tracing::info!(id = step.id, process_id = ?step.process_id, "Step created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: step })))
}

pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let step = StepRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: step }))
}

pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStep>,
) -> AppResult<impl IntoResponse> {
    validate_short_text(patched_str(&input.title), "title")?;

    let step = StepRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(id, "Step updated");

    Ok(Json(DataResponse { data: step }))
}

pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !StepRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Step deleted");
    Ok(StatusCode::NO_CONTENT)
}
