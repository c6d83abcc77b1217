use axum::routing::get;
use axum::Router;

use crate::handlers::steps;
use crate::state::AppState;

/// Routes mounted at `/admin/steps`.
///
/// ```text
/// GET    /      -> list (?is_active, process_id)
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(steps::list).post(steps::create))
        .route(
            "/{id}",
            get(steps::get_by_id).put(steps::update).delete(steps::delete),
        )
}
