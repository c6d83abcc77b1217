use axum::routing::{get, post};
use axum::Router;

use crate::handlers::get_in_touch;
use crate::state::AppState;

/// Routes mounted at `/admin/get-in-touch`.
///
/// ```text
/// GET    /                   -> list (?is_active)
/// POST   /                   -> create
/// GET    /{id}               -> get_by_id
/// PUT    /{id}               -> update
/// DELETE /{id}               -> delete
/// POST   /{id}/activate      -> activate
/// GET    /{id}/info-items    -> list_info_items
/// GET    /{id}/social-links  -> list_social_links
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_in_touch::list).post(get_in_touch::create))
        .route(
            "/{id}",
            get(get_in_touch::get_by_id)
                .put(get_in_touch::update)
                .delete(get_in_touch::delete),
        )
        .route("/{id}/activate", post(get_in_touch::activate))
        .route("/{id}/info-items", get(get_in_touch::list_info_items))
        .route("/{id}/social-links", get(get_in_touch::list_social_links))
}
