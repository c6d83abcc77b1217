use axum::routing::{get, post};
use axum::Router;

use crate::handlers::metadata;
use crate::state::AppState;

/// Routes mounted at `/admin/metadata`.
///
/// ```text
/// GET    /               -> list (?is_active)
/// POST   /               -> create
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete
/// POST   /{id}/activate  -> activate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(metadata::list).post(metadata::create))
        .route(
            "/{id}",
            get(metadata::get_by_id).put(metadata::update).delete(metadata::delete),
        )
        .route("/{id}/activate", post(metadata::activate))
}
