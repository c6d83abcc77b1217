//! Handler for the public page view model.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use folio_db::repositories::PageRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/page
///
/// Everything the public page shows: active singletons (or `null`), active
/// collections, and the section toggles already applied.
pub async fn get_page(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let page = PageRepo::load(&state.pool).await?;
    Ok(Json(DataResponse { data: page }))
}
