//! Handlers for the `/admin/sections` toggles.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::page::SectionVisibility;
use folio_db::models::sections::UpdateSections;
use folio_db::repositories::SectionsRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/sections
///
/// The effective toggles. Everything is visible until the first save.
pub async fn get(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let visibility = SectionsRepo::find_current(&state.pool)
        .await?
        .as_ref()
        .map(SectionVisibility::from)
        .unwrap_or_default();
    Ok(Json(DataResponse { data: visibility }))
}

/// PUT /api/v1/admin/sections
///
/// Patch the toggles, creating the settings row on first use.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpdateSections>,
) -> AppResult<impl IntoResponse> {
    let sections = SectionsRepo::upsert(&state.pool, &input).await?;
    let visibility = SectionVisibility::from(&sections);

    tracing::info!(?visibility, "Section toggles updated");

    Ok(Json(DataResponse { data: visibility }))
}
