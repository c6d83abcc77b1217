//! Crawler files and the liveness/readiness probes.

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::site::{render_robots, render_sitemap};
use folio_db::repositories::PageRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /robots.txt
pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_robots(&state.config.site_url),
    )
}

/// GET /sitemap.xml
///
/// `lastmod` follows the newest change to content the page shows.
pub async fn sitemap(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let last_modified = PageRepo::last_modified(&state.pool).await?;
    Ok((
        [(CONTENT_TYPE, "text/xml; charset=utf-8")],
        render_sitemap(&state.config.site_url, last_modified),
    ))
}

/// GET /status
///
/// Plain `OK` without touching the database.
pub async fn status() -> &'static str {
    "OK"
}

#[derive(Debug, Serialize)]
pub struct Readiness {
    /// `ok` or `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// GET /health
///
/// Readiness: 200 while the database answers, 503 otherwise.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let db_healthy = match folio_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            false
        }
    };

    let (code, status) = if db_healthy {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        code,
        Json(Readiness {
            status,
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }),
    )
}
