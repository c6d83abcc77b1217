//! Handlers for the `/admin/heroes` resource.
//!
//! Saving an active hero demotes the previous one; see `HeroRepo`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::patch::patched_str;
use folio_core::types::DbId;
use folio_core::validation::validate_short_text;
use folio_db::models::filter::ListFilter;
use folio_db::models::hero::{CreateHero, UpdateHero};
use folio_db::repositories::HeroRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Hero", id })
}

fn validate_fields(
    greeting: Option<&str>,
    full_name: Option<&str>,
    title: Option<&str>,
) -> Result<(), CoreError> {
    validate_short_text(greeting, "greeting")?;
    validate_short_text(full_name, "full_name")?;
    validate_short_text(title, "title")
}

/// GET /api/v1/admin/heroes
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(filter): Query<ListFilter>,
) -> AppResult<impl IntoResponse> {
    let heroes = HeroRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: heroes }))
}

/// POST /api/v1/admin/heroes
///
/// New heroes are active unless `is_active: false` is sent.
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateHero>,
) -> AppResult<impl IntoResponse> {
    validate_fields(
        input.greeting.as_deref(),
        input.full_name.as_deref(),
        input.title.as_deref(),
    )?;

    let hero = HeroRepo::create(&state.pool, &input).await?;

    tracing::info!(id = hero.id, is_active = hero.is_active, "Hero created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: hero })))
}

/// GET /api/v1/admin/heroes/{id}
pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let hero = HeroRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: hero }))
}

/// PUT /api/v1/admin/heroes/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateHero>,
) -> AppResult<impl IntoResponse> {
    validate_fields(
        patched_str(&input.greeting),
        patched_str(&input.full_name),
        patched_str(&input.title),
    )?;

    let hero = HeroRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(id, is_active = hero.is_active, "Hero updated");

    Ok(Json(DataResponse { data: hero }))
}

/// POST /api/v1/admin/heroes/{id}/activate
pub async fn activate(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let hero = HeroRepo::activate(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(id, "Hero activated");

    Ok(Json(DataResponse { data: hero }))
}

/// DELETE /api/v1/admin/heroes/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !HeroRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(id, "Hero deleted");

    Ok(StatusCode::NO_CONTENT)
}
