//! Admin dashboard summary.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use folio_db::repositories::OverviewRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/overview
///
/// Row counts per content table and the active id of each singleton kind.
pub async fn get(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let overview = OverviewRepo::load(&state.pool).await?;
    Ok(Json(DataResponse { data: overview }))
}
