//! Handlers for the `/admin/social-links` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::patch::patched_str;
use folio_core::types::DbId;
use folio_core::validation::{validate_short_text, validate_url};
use folio_db::models::get_in_touch::{ContactChildFilter, CreateSocialLink, UpdateSocialLink};
use folio_db::repositories::SocialLinkRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "SocialLink",
        id,
    })
}

fn validate_fields(title: Option<&str>, link: Option<&str>) -> Result<(), CoreError> {
    validate_short_text(title, "title")?;
    validate_url(link, "link")
}

/// GET /api/v1/admin/social-links?is_active=&get_in_touch_id=
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(filter): Query<ContactChildFilter>,
) -> AppResult<impl IntoResponse> {
    let links = SocialLinkRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: links }))
}

pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateSocialLink>,
) -> AppResult<impl IntoResponse> {
    validate_fields(input.title.as_deref(), input.link.as_deref())?;

    let link = SocialLinkRepo::create(&state.pool, &input).await?;

    tracing::info!(id = link.id, get_in_touch_id = ?link.get_in_touch_id, "Social link created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: link })))
}

pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let link = SocialLinkRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: link }))
}

pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSocialLink>,
) -> AppResult<impl IntoResponse> {
    validate_fields(patched_str(&input.title), patched_str(&input.link))?;

    let link = SocialLinkRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(id, "Social link updated");

    Ok(Json(DataResponse { data: link }))
}

pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !SocialLinkRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Social link deleted");
    Ok(StatusCode::NO_CONTENT)
}
