//! Handlers for the `/admin/get-in-touch` resource and its nested details.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::patch::patched_str;
use folio_core::types::DbId;
use folio_core::validation::validate_short_text;
use folio_db::models::filter::ListFilter;
use folio_db::models::get_in_touch::{ContactChildFilter, CreateGetInTouch, UpdateGetInTouch};
use folio_db::repositories::{GetInTouchRepo, InfoItemRepo, SocialLinkRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "GetInTouch",
        id,
    })
}

/// 404 unless the contact section exists.
async fn ensure_exists(state: &AppState, id: DbId) -> AppResult<()> {
    GetInTouchRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(())
}

/// GET /api/v1/admin/get-in-touch?is_active=&q=
///
/// Each section carries `active_info_count` and `active_social_count`.
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(filter): Query<ListFilter>,
) -> AppResult<impl IntoResponse> {
    let rows = GetInTouchRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: rows }))
}

pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateGetInTouch>,
) -> AppResult<impl IntoResponse> {
    validate_short_text(input.title.as_deref(), "title")?;

    let contact = GetInTouchRepo::create(&state.pool, &input).await?;

    tracing::info!(
        id = contact.id,
        is_active = contact.is_active,
        "Contact section created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: contact })))
}

pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let contact = GetInTouchRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: contact }))
}

pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGetInTouch>,
) -> AppResult<impl IntoResponse> {
    validate_short_text(patched_str(&input.title), "title")?;

    let contact = GetInTouchRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(id, is_active = contact.is_active, "Contact section updated");

    Ok(Json(DataResponse { data: contact }))
}

pub async fn activate(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let contact = GetInTouchRepo::activate(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(id, "Contact section activated");

    Ok(Json(DataResponse { data: contact }))
}

/// Deleting a contact section keeps its details and links, detached.
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !GetInTouchRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Contact section deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/admin/get-in-touch/{id}/info-items
pub async fn list_info_items(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<ListFilter>,
) -> AppResult<impl IntoResponse> {
    ensure_exists(&state, id).await?;
    let filter = ContactChildFilter {
        is_active: params.is_active,
        get_in_touch_id: Some(id),
        q: params.q,
    };
    let items = InfoItemRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/admin/get-in-touch/{id}/social-links
pub async fn list_social_links(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<ListFilter>,
) -> AppResult<impl IntoResponse> {
    ensure_exists(&state, id).await?;
    let filter = ContactChildFilter {
        is_active: params.is_active,
        get_in_touch_id: Some(id),
        q: params.q,
    };
    let links = SocialLinkRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: links }))
}
