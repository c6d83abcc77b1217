pub mod abouts;
pub mod auth;
pub mod get_in_touch;
pub mod heroes;
pub mod info_items;
pub mod messages;
pub mod metadata;
pub mod processes;
pub mod projects;
pub mod site;
pub mod skill_groups;
pub mod skills;
pub mod social_links;
pub mod steps;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                              login (public)
///
/// /page                                    page view model (public)
/// /contact                                 submit message, JSON (public)
///
/// /admin/overview                          counts and active singletons
/// /admin/sections                          get, update toggles
///
/// /admin/metadata                          list, create
/// /admin/metadata/{id}                     get, update, delete
/// /admin/metadata/{id}/activate            activate
/// /admin/heroes                            list, create
/// /admin/heroes/{id}                       get, update, delete
/// /admin/heroes/{id}/activate              activate
/// /admin/abouts                            list, create
/// /admin/abouts/{id}                       get, update, delete
/// /admin/abouts/{id}/activate              activate
/// /admin/get-in-touch                      list, create
/// /admin/get-in-touch/{id}                 get, update, delete
/// /admin/get-in-touch/{id}/activate        activate
/// /admin/get-in-touch/{id}/info-items      list details
/// /admin/get-in-touch/{id}/social-links    list links
///
/// /admin/info-items                        list, create
/// /admin/info-items/{id}                   get, update, delete
/// /admin/social-links                      list, create
/// /admin/social-links/{id}                 get, update, delete
/// /admin/projects                          list, create
/// /admin/projects/{id}                     get, update, delete
/// /admin/skill-groups                      list, create
/// /admin/skill-groups/{id}                 get, update, delete
/// /admin/skill-groups/{id}/skills          list skills
/// /admin/skills                            list, create
/// /admin/skills/{id}                       get, update, delete
/// /admin/processes                         list, create
/// /admin/processes/{id}                    get, update, delete
/// /admin/processes/{id}/steps              list steps
/// /admin/steps                             list, create
/// /admin/steps/{id}                        get, update, delete
///
/// /admin/messages                          list
/// /admin/messages/{id}                     get, delete
/// ```
///
/// Content lists accept `?is_active=` and `?q=` (case-insensitive search).
///
/// Every `/admin` handler takes the `RequireAdmin` extractor.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .route("/page", get(handlers::page::get_page))
        .route("/contact", post(handlers::contact::submit_json))
        .nest("/admin", admin_routes())
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/overview", get(handlers::overview::get))
        .route(
            "/sections",
            get(handlers::sections::get).put(handlers::sections::update),
        )
        .nest("/metadata", metadata::router())
        .nest("/heroes", heroes::router())
        .nest("/abouts", abouts::router())
        .nest("/get-in-touch", get_in_touch::router())
        .nest("/info-items", info_items::router())
        .nest("/social-links", social_links::router())
        .nest("/projects", projects::router())
        .nest("/skill-groups", skill_groups::router())
        .nest("/skills", skills::router())
        .nest("/processes", processes::router())
        .nest("/steps", steps::router())
        .nest("/messages", messages::router())
}
