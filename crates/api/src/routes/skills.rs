use axum::routing::get;
use axum::Router;

use crate::handlers::skills;
use crate::state::AppState;

/// Routes mounted at `/admin/skills`.
///
/// ```text
/// GET    /      -> list (?is_active, group_id)
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(skills::list).post(skills::create))
        .route(
            "/{id}",
            get(skills::get_by_id).put(skills::update).delete(skills::delete),
        )
}
