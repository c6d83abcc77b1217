use axum::routing::{get, post};
use axum::Router;

use crate::handlers::heroes;
use crate::state::AppState;

/// Routes mounted at `/admin/heroes`.
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
        .route("/", get(heroes::list).post(heroes::create))
        .route(
            "/{id}",
            get(heroes::get_by_id).put(heroes::update).delete(heroes::delete),
        )
        .route("/{id}/activate", post(heroes::activate))
}
