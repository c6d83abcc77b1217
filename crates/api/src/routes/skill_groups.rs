use axum::routing::get;
use axum::Router;

use crate::handlers::skill_groups;
use crate::state::AppState;

/// Routes mounted at `/admin/skill-groups`.
///
/// ```text
/// GET    /              -> list (?is_active)
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// GET    /{id}/skills   -> list_skills
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(skill_groups::list).post(skill_groups::create))
        .route(
            "/{id}",
            get(skill_groups::get_by_id)
                .put(skill_groups::update)
                .delete(skill_groups::delete),
        )
        .route("/{id}/skills", get(skill_groups::list_skills))
}
