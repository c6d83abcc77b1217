//! Integration tests for admin login and bearer-token enforcement.

mod common;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use common::{
    admin_token, body_json, get, get_auth, post_json, token_with_role, ADMIN_PASSWORD,
    ADMIN_USERNAME,
};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_with_valid_credentials_returns_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/auth/login",
        json!({ "username": ADMIN_USERNAME, "password": ADMIN_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["token_type"], "Bearer");
    assert_eq!(json["expires_in"], 3600);
    let token = json["access_token"].as_str().unwrap().to_string();
    assert_matches!(
        folio_api::auth::jwt::validate_token(&token, &common::test_config().jwt),
        Ok(claims) if claims.sub == ADMIN_USERNAME && claims.role == "admin"
    );

    // The issued token opens the admin area.
    let response = get_auth(app, "/api/v1/admin/overview", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_with_wrong_password_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": ADMIN_USERNAME, "password": "not-the-password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Invalid username or password");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_with_unknown_username_returns_same_401(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": "root", "password": ADMIN_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid username or password");
}

// ---------------------------------------------------------------------------
// Token enforcement
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_route_without_token_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/admin/heroes").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_route_with_garbage_token_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/admin/heroes", "not.a.jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_route_with_non_admin_role_returns_403(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/admin/heroes", &token_with_role("viewer")).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn public_routes_need_no_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/page").await;
    assert_eq!(response.status(), StatusCode::OK);

    // A valid token on a public route is simply ignored.
    let response = get_auth(app, "/api/v1/page", &admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);
}
