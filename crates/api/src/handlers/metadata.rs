//! Handlers for the `/admin/metadata` resource (page title, description,
//! keywords and logo character).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::patch::patched_str;
use folio_core::types::DbId;
use folio_core::validation::validate_short_text;
use folio_db::models::filter::ListFilter;
use folio_db::models::site_metadata::{CreateSiteMetadata, UpdateSiteMetadata};
use folio_db::repositories::SiteMetadataRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "MetaData",
        id,
    })
}

/// GET /api/v1/admin/metadata
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(filter): Query<ListFilter>,
) -> AppResult<impl IntoResponse> {
    let rows = SiteMetadataRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// POST /api/v1/admin/metadata
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateSiteMetadata>,
) -> AppResult<impl IntoResponse> {
    validate_short_text(input.title.as_deref(), "title")?;

    let meta = SiteMetadataRepo::create(&state.pool, &input).await?;

    tracing::info!(id = meta.id, is_active = meta.is_active, "Metadata created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: meta })))
}

/// GET /api/v1/admin/metadata/{id}
pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let meta = SiteMetadataRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: meta }))
}

/// PUT /api/v1/admin/metadata/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSiteMetadata>,
) -> AppResult<impl IntoResponse> {
    validate_short_text(patched_str(&input.title), "title")?;

    let meta = SiteMetadataRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(id, is_active = meta.is_active, "Metadata updated");

    Ok(Json(DataResponse { data: meta }))
}

/// POST /api/v1/admin/metadata/{id}/activate
pub async fn activate(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let meta = SiteMetadataRepo::activate(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(id, "Metadata activated");

    Ok(Json(DataResponse { data: meta }))
}

/// DELETE /api/v1/admin/metadata/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !SiteMetadataRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Metadata deleted");
    Ok(StatusCode::NO_CONTENT)
}
