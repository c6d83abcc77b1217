//! Integration tests for visitor contact submissions.

mod common;

use axum::http::header::LOCATION;
use axum::http::StatusCode;
use common::{admin_token, body_json, get_auth, post_form, post_json};
use serde_json::{json, Value};
use sqlx::PgPool;

async fn inbox(app: &axum::Router) -> Value {
    let response = get_auth(app.clone(), "/api/v1/admin/messages", &admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"].clone()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn json_submission_is_stored_and_returned(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/contact",
        json!({ "name": "Ada", "email": "ada@example.com", "message": "Hello" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let message = body_json(response).await["data"].clone();
    assert_eq!(message["name"], "Ada");
    assert_eq!(message["email"], "ada@example.com");
    assert!(message["created_at"].is_string());

    let inbox = inbox(&app).await;
    assert_eq!(inbox["total"], 1);
    assert_eq!(inbox["items"][0]["id"], message["id"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn submission_is_stored_without_validation(pool: PgPool) {
    let app = common::build_test_app(pool);

    let long_name = "n".repeat(1000);
    let response = post_json(
        app.clone(),
        "/api/v1/contact",
        json!({ "name": long_name, "email": "not-an-email" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let message = body_json(response).await["data"].clone();
    assert_eq!(message["email"], "not-an-email");
    assert_eq!(message["message"], Value::Null);

    let response = post_json(app, "/api/v1/contact", json!({})).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn form_submission_redirects_to_page(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_form(
        app.clone(),
        "/contact",
        "name=Grace&email=grace%40example.com&message=Hi+there",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/");

    let inbox = inbox(&app).await;
    assert_eq!(inbox["items"][0]["email"], "grace@example.com");
    assert_eq!(inbox["items"][0]["message"], "Hi there");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn inbox_pages_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool);

    for name in ["first", "second", "third"] {
        let response = post_json(app.clone(), "/api/v1/contact", json!({ "name": name })).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get_auth(
        app.clone(),
        "/api/v1/admin/messages?limit=2&offset=0",
        &admin_token(),
    )
    .await;
    let page = body_json(response).await["data"].clone();
    assert_eq!(page["total"], 3);
    assert_eq!(page["limit"], 2);
    let names: Vec<_> = page["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["third", "second"]);
}
