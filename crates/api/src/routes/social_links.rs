use axum::routing::get;
use axum::Router;

use crate::handlers::social_links;
use crate::state::AppState;

/// Routes mounted at `/admin/social-links`.
///
/// ```text
/// GET    /      -> list (?is_active, get_in_touch_id)
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(social_links::list).post(social_links::create))
        .route(
            "/{id}",
            get(social_links::get_by_id).put(social_links::update).delete(social_links::delete),
        )
}
