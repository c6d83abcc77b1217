//! Handlers for the `/admin/skill-groups` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::patch::patched_str;
use folio_core::types::DbId;
use folio_core::validation::validate_short_text;
use folio_db::models::filter::ListFilter;
use folio_db::models::skill::{CreateSkillGroup, SkillFilter, UpdateSkillGroup};
use folio_db::repositories::{SkillGroupRepo, SkillRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "SkillGroup",
        id,
    })
}

/// GET /api/v1/admin/skill-groups?is_active=&q=
///
/// Each group carries `active_skill_count`.
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(filter): Query<ListFilter>,
) -> AppResult<impl IntoResponse> {
    let groups = SkillGroupRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: groups }))
}

pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateSkillGroup>,
) -> AppResult<impl IntoResponse> {
    validate_short_text(input.title.as_deref(), "title")?;

    let group = SkillGroupRepo::create(&state.pool, &input).await?;

    tracing::info!(id = group.id, "Skill group created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: group })))
}

pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let group = SkillGroupRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: group }))
}

pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSkillGroup>,
) -> AppResult<impl IntoResponse> {
    validate_short_text(patched_str(&input.title), "title")?;

    let group = SkillGroupRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(id, "Skill group updated");

    Ok(Json(DataResponse { data: group }))
}

/// Skills in the group survive the deletion with their group cleared.
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !SkillGroupRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Skill group deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/admin/skill-groups/{id}/skills
pub async fn list_skills(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<ListFilter>,
) -> AppResult<impl IntoResponse> {
    SkillGroupRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let filter = SkillFilter {
        is_active: params.is_active,
        group_id: Some(id),
        q: params.q,
    };
    let skills = SkillRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: skills }))
}
