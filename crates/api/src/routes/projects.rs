use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Routes mounted at `/admin/projects`.
///
/// ```text
/// GET    /      -> list (?is_active)
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list).post(projects::create))
        .route(
            "/{id}",
            get(projects::get_by_id).put(projects::update).delete(projects::delete),
        )
}
