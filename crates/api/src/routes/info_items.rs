use axum::routing::get;
use axum::Router;

use crate::handlers::info_items;
use crate::state::AppState;

/// Routes mounted at `/admin/info-items`.
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
        .route("/", get(info_items::list).post(info_items::create))
        .route(
            "/{id}",
            get(info_items::get_by_id).put(info_items::update).delete(info_items::delete),
        )
}
