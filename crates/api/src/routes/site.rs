//! Root-level routes served next to the rendered page.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{contact, site};
use crate::state::AppState;

/// Mounted at the root, not under `/api/v1`.
///
/// ```text
/// GET  /health       -> health (readiness, pings the DB)
/// GET  /status       -> status (liveness, no DB)
/// GET  /robots.txt   -> robots
/// GET  /sitemap.xml  -> sitemap
/// POST /contact      -> submit_form (form-urlencoded)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(site::health))
        .route("/status", get(site::status))
        .route("/robots.txt", get(site::robots))
        .route("/sitemap.xml", get(site::sitemap))
        .route("/contact", post(contact::submit_form))
}
