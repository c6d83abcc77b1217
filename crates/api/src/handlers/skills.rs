//! Handlers for the `/admin/skills` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::patch::patched_str;
use folio_core::types::DbId;
use folio_core::validation::validate_short_text;
use folio_db::models::skill::{CreateSkill, SkillFilter, UpdateSkill};
use folio_db::repositories::SkillRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Skill", id })
}

/// GET /api/v1/admin/skills?is_active=&group_id=&q=
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(filter): Query<SkillFilter>,
) -> AppResult<impl IntoResponse> {
    let skills = SkillRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: skills }))
}

/// POST /api/v1/admin/skills
///
/// An unknown `group_id` is rejected with 400.
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateSkill>,
) -> AppResult<impl IntoResponse> {
    validate_short_text(input.title.as_deref(), "title")?;

    let skill = SkillRepo::create(&state.pool, &input).await?;

    tracing::info!(id = skill.id, group_id = ?skill.group_id, "Skill created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: skill })))
}

pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let skill = SkillRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: skill }))
}

pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSkill>,
) -> AppResult<impl IntoResponse> {
    validate_short_text(patched_str(&input.title), "title")?;

    let skill = SkillRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(id, "Skill updated");

    Ok(Json(DataResponse { data: skill }))
}

pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !SkillRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Skill deleted");
    Ok(StatusCode::NO_CONTENT)
}
