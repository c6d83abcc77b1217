//! Handlers for the `/admin/projects` resource.
//!
//! A project's skill set travels in the body as `skill_ids` and is replaced
//! atomically with the project row.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::patch::patched_str;
use folio_core::types::DbId;
use folio_core::validation::{validate_short_text, validate_url};
use folio_db::models::filter::ListFilter;
use folio_db::models::project::{CreateProject, UpdateProject};
use folio_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

struct ProjectFields<'a> {
    title: Option<&'a str>,
    image_url: Option<&'a str>,
    demo_url: Option<&'a str>,
    source_url: Option<&'a str>,
}

impl ProjectFields<'_> {
    fn validate(&self) -> Result<(), CoreError> {
        validate_short_text(self.title, "title")?;
        validate_url(self.image_url, "image_url")?;
        validate_url(self.demo_url, "demo_url")?;
        validate_url(self.source_url, "source_url")
    }
}

/// GET /api/v1/admin/projects
///
/// Listed in display order: `ordering_index` ascending (unset last), newest
/// first on ties.
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(filter): Query<ListFilter>,
) -> AppResult<impl IntoResponse> {
    let projects = ProjectRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// POST /api/v1/admin/projects
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<impl IntoResponse> {
    ProjectFields {
        title: input.title.as_deref(),
        image_url: input.image_url.as_deref(),
        demo_url: input.demo_url.as_deref(),
        source_url: input.source_url.as_deref(),
    }
    .validate()?;

    let project = ProjectRepo::create(&state.pool, &input).await?;
    let project = ProjectRepo::find_with_skills(&state.pool, project.id)
        .await?
        .ok_or_else(|| not_found(project.id))?;

    tracing::info!(
        id = project.project.id,
        skills = project.skills.len(),
        "Project created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// GET /api/v1/admin/projects/{id}
///
/// Includes every linked skill, active or not.
pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::find_with_skills(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: project }))
}

/// PUT /api/v1/admin/projects/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<impl IntoResponse> {
    ProjectFields {
        title: patched_str(&input.title),
        image_url: patched_str(&input.image_url),
        demo_url: patched_str(&input.demo_url),
        source_url: patched_str(&input.source_url),
    }
    .validate()?;

    ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    let project = ProjectRepo::find_with_skills(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(id, skills = project.skills.len(), "Project updated");

    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/v1/admin/projects/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ProjectRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Project deleted");
    Ok(StatusCode::NO_CONTENT)
}
