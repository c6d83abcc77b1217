use axum::routing::{get, post};
use axum::Router;

use crate::handlers::abouts;
use crate::state::AppState;

/// Routes mounted at `/admin/abouts`.
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
        .route("/", get(abouts::list).post(abouts::create))
        .route(
            "/{id}",
            get(abouts::get_by_id).put(abouts::update).delete(abouts::delete),
        )
        .route("/{id}/activate", post(abouts::activate))
}
