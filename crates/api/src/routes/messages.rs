use axum::routing::get;
use axum::Router;

use crate::handlers::messages;
use crate::state::AppState;

/// Routes mounted at `/admin/messages`. Read and delete only.
///
/// ```text
/// GET    /      -> list (?limit, offset)
/// GET    /{id}  -> get_by_id
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(messages::list))
        .route("/{id}", get(messages::get_by_id).delete(messages::delete))
}
