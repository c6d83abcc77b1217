use axum::routing::get;
use axum::Router;

use crate::handlers::processes;
use crate::state::AppState;

/// Routes mounted at `/admin/processes`.
///
/// ```text
/// GET    /             -> list (?is_active)
/// POST   /             -> create
/// GET    /{id}         -> get_by_id
/// PUT    /{id}         -> update
/// DELETE /{id}         -> delete
/// GET    /{id}/steps   -> list_steps
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(processes::list).post(processes::create))
        .route(
            "/{id}",
            get(processes::get_by_id)
                .put(processes::update)
                .delete(processes::delete),
        )
        .route("/{id}/steps", get(processes::list_steps))
}
