//! Integration tests for the administrative CRUD surface.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, delete_auth, get_auth, post_auth, post_json_auth, put_json_auth,
};
use serde_json::{json, Value};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// POST `body` to an admin collection and return the created `data` object.
async fn create(app: &axum::Router, uri: &str, body: Value, token: &str) -> Value {
    let response = post_json_auth(app.clone(), uri, body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED, "POST {uri}");
    body_json(response).await["data"].clone()
}

async fn fetch(app: &axum::Router, uri: &str, token: &str) -> Value {
    let response = get_auth(app.clone(), uri, token).await;
    assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    body_json(response).await["data"].clone()
}

// ---------------------------------------------------------------------------
// Singletons
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn creating_a_hero_demotes_the_previous_one(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();

    let ada = create(&app, "/api/v1/admin/heroes", json!({ "full_name": "Ada" }), &token).await;
    assert_eq!(ada["is_active"], true);
    assert_eq!(ada["greeting"], "Hello I'm");

    let grace = create(&app, "/api/v1/admin/heroes", json!({ "full_name": "Grace" }), &token).await;
    assert_eq!(grace["is_active"], true);

    let ada = fetch(&app, &format!("/api/v1/admin/heroes/{}", ada["id"]), &token).await;
    assert_eq!(ada["is_active"], false);

    let active = fetch(&app, "/api/v1/admin/heroes?is_active=true", &token).await;
    let ids: Vec<_> = active.as_array().unwrap().iter().map(|h| h["id"].clone()).collect();
    assert_eq!(ids, vec![grace["id"].clone()]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn activate_endpoint_switches_active_metadata(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();

    let live = create(&app, "/api/v1/admin/metadata", json!({ "title": "Live" }), &token).await;
    let draft = create(
        &app,
        "/api/v1/admin/metadata",
        json!({ "title": "Draft", "is_active": false }),
        &token,
    )
    .await;
    assert_eq!(draft["is_active"], false);

    let response = post_auth(
        app.clone(),
        &format!("/api/v1/admin/metadata/{}/activate", draft["id"]),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["is_active"], true);

    let live = fetch(&app, &format!("/api/v1/admin/metadata/{}", live["id"]), &token).await;
    assert_eq!(live["is_active"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn activating_a_missing_row_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();

    let response = post_auth(app, "/api/v1/admin/abouts/999999/activate", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "About with id 999999 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_to_active_demotes_sibling_contact(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();

    let first = create(&app, "/api/v1/admin/get-in-touch", json!({ "title": "A" }), &token).await;
    let second = create(
        &app,
        "/api/v1/admin/get-in-touch",
        json!({ "title": "B", "is_active": false }),
        &token,
    )
    .await;

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/admin/get-in-touch/{}", second["id"]),
        json!({ "is_active": true }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let first = fetch(&app, &format!("/api/v1/admin/get-in-touch/{}", first["id"]), &token).await;
    assert_eq!(first["is_active"], false);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn overlong_title_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();

    let response = post_json_auth(
        app,
        "/api/v1/admin/projects",
        json!({ "title": "x".repeat(256) }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "title must be at most 255 characters, got 256");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_link_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();

    let response = post_json_auth(
        app,
        "/api/v1/admin/social-links",
        json!({ "title": "GitHub", "link": "github.com/me" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_parent_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();

    let response = post_json_auth(
        app,
        "/api/v1/admin/skills",
        json!({ "title": "Rust", "group_id": 424242 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Referenced row does not exist"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_skill_on_project_returns_400_and_creates_nothing(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();

    let response = post_json_auth(
        app.clone(),
        "/api/v1/admin/projects",
        json!({ "title": "Folio", "skill_ids": [424242] }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let projects = fetch(&app, "/api/v1/admin/projects", &token).await;
    assert!(projects.as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn project_carries_its_skills(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();

    let rust = create(&app, "/api/v1/admin/skills", json!({ "title": "Rust" }), &token).await;
    let sql = create(&app, "/api/v1/admin/skills", json!({ "title": "SQL" }), &token).await;

    let project = create(
        &app,
        "/api/v1/admin/projects",
        json!({ "title": "Folio", "skill_ids": [rust["id"], sql["id"]] }),
        &token,
    )
    .await;
    assert_eq!(project["source_url"], "https://github.com/");
    assert_eq!(project["skills"].as_array().unwrap().len(), 2);

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/admin/projects/{}", project["id"]),
        json!({ "skill_ids": [sql["id"]] }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await["data"].clone();
    let skills = updated["skills"].as_array().unwrap();
    assert_eq!(skills.len(), 1);
    assert_eq!(skills[0]["title"], "SQL");
    assert_eq!(updated["title"], "Folio");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_a_group_orphans_its_skills(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();

    let group = create(&app, "/api/v1/admin/skill-groups", json!({ "title": "Languages" }), &token).await;
    let skill = create(
        &app,
        "/api/v1/admin/skills",
        json!({ "title": "Rust", "group_id": group["id"] }),
        &token,
    )
    .await;

    let listed = fetch(&app, &format!("/api/v1/admin/skill-groups/{}/skills", group["id"]), &token).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let response = delete_auth(
        app.clone(),
        &format!("/api/v1/admin/skill-groups/{}", group["id"]),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let skill = fetch(&app, &format!("/api/v1/admin/skills/{}", skill["id"]), &token).await;
    assert_eq!(skill["group_id"], Value::Null);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn process_lists_its_steps(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();

    let process = create(&app, "/api/v1/admin/processes", json!({ "description": "How I work" }), &token).await;
    for title in ["Listen", "Build"] {
        create(
            &app,
            "/api/v1/admin/steps",
            json!({ "title": title, "process_id": process["id"] }),
            &token,
        )
        .await;
    }
    create(&app, "/api/v1/admin/steps", json!({ "title": "Loose" }), &token).await;

    let steps = fetch(&app, &format!("/api/v1/admin/processes/{}/steps", process["id"]), &token).await;
    assert_eq!(steps.as_array().unwrap().len(), 2);

    let filtered = fetch(
        &app,
        &format!("/api/v1/admin/steps?process_id={}", process["id"]),
        &token,
    )
    .await;
    assert_eq!(filtered.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn contact_children_listed_under_their_section(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();

    let contact = create(&app, "/api/v1/admin/get-in-touch", json!({ "title": "Say hi" }), &token).await;
    create(
        &app,
        "/api/v1/admin/info-items",
        json!({ "key": "Email", "value": "me@example.com", "get_in_touch_id": contact["id"] }),
        &token,
    )
    .await;
    create(
        &app,
        "/api/v1/admin/social-links",
        json!({ "title": "GitHub", "link": "https://github.com/me", "get_in_touch_id": contact["id"] }),
        &token,
    )
    .await;

    let base = format!("/api/v1/admin/get-in-touch/{}", contact["id"]);
    let items = fetch(&app, &format!("{base}/info-items"), &token).await;
    assert_eq!(items[0]["key"], "Email");
    let links = fetch(&app, &format!("{base}/social-links"), &token).await;
    assert_eq!(links[0]["link"], "https://github.com/me");

    let response = get_auth(app, "/api/v1/admin/get-in-touch/999999/info-items", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_rows_return_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();

    for uri in [
        "/api/v1/admin/heroes/999999",
        "/api/v1/admin/projects/999999",
        "/api/v1/admin/steps/999999",
        "/api/v1/admin/messages/999999",
    ] {
        let response = get_auth(app.clone(), uri, &token).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {uri}");
    }

    let response = delete_auth(app, "/api/v1/admin/skills/999999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Partial updates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn null_in_an_update_clears_the_field(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();

    let group = create(&app, "/api/v1/admin/skill-groups", json!({ "title": "Backend" }), &token).await;
    let skill = create(
        &app,
        "/api/v1/admin/skills",
        json!({ "title": "Rust", "group_id": group["id"] }),
        &token,
    )
    .await;

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/admin/skills/{}", skill["id"]),
        json!({ "group_id": null }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let skill = body_json(response).await["data"].clone();
    assert_eq!(skill["group_id"], Value::Null);
    assert_eq!(skill["title"], "Rust");

    let project = create(
        &app,
        "/api/v1/admin/projects",
        json!({ "title": "Folio", "ordering_index": 3, "demo_url": "https://x.io" }),
        &token,
    )
    .await;
    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/admin/projects/{}", project["id"]),
        json!({ "ordering_index": null, "demo_url": null }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let project = body_json(response).await["data"].clone();
    assert_eq!(project["ordering_index"], Value::Null);
    assert_eq!(project["demo_url"], Value::Null);
    assert_eq!(project["title"], "Folio");
    assert_eq!(project["source_url"], "https://github.com/");
}

// ---------------------------------------------------------------------------
// Listing search and counts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_endpoints_filter_by_search_term(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();

    for (title, description) in [("Folio", "Portfolio backend"), ("Ledger", "Bookkeeping")] {
        create(
            &app,
            "/api/v1/admin/projects",
            json!({ "title": title, "description": description }),
            &token,
        )
        .await;
    }

    let found = fetch(&app, "/api/v1/admin/projects?q=BOOK", &token).await;
    let titles: Vec<_> = found.as_array().unwrap().iter().map(|p| p["title"].clone()).collect();
    assert_eq!(titles, vec![json!("Ledger")]);

    let both = fetch(&app, "/api/v1/admin/projects?q=", &token).await;
    assert_eq!(both.as_array().unwrap().len(), 2);

    let none = fetch(&app, "/api/v1/admin/projects?q=cobol&is_active=true", &token).await;
    assert!(none.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn parent_lists_carry_active_child_counts(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();

    let group = create(&app, "/api/v1/admin/skill-groups", json!({ "title": "Backend" }), &token).await;
    for (title, is_active) in [("Rust", true), ("Perl", false)] {
        create(
            &app,
            "/api/v1/admin/skills",
            json!({ "title": title, "group_id": group["id"], "is_active": is_active }),
            &token,
        )
        .await;
    }

    let process = create(&app, "/api/v1/admin/processes", json!({ "description": "How" }), &token).await;
    create(
        &app,
        "/api/v1/admin/steps",
        json!({ "title": "Plan", "process_id": process["id"] }),
        &token,
    )
    .await;

    let contact = create(&app, "/api/v1/admin/get-in-touch", json!({ "title": "Hi" }), &token).await;
    create(
        &app,
        "/api/v1/admin/social-links",
        json!({ "title": "GitHub", "get_in_touch_id": contact["id"] }),
        &token,
    )
    .await;

    let groups = fetch(&app, "/api/v1/admin/skill-groups", &token).await;
    assert_eq!(groups[0]["title"], "Backend");
    assert_eq!(groups[0]["active_skill_count"], 1);

    let processes = fetch(&app, "/api/v1/admin/processes", &token).await;
    assert_eq!(processes[0]["active_step_count"], 1);

    let sections = fetch(&app, "/api/v1/admin/get-in-touch", &token).await;
    assert_eq!(sections[0]["active_info_count"], 0);
    assert_eq!(sections[0]["active_social_count"], 1);
}

// ---------------------------------------------------------------------------
// Sections and overview
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn sections_default_to_visible_and_accept_patches(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();

    let sections = fetch(&app, "/api/v1/admin/sections", &token).await;
    assert_eq!(
        sections,
        json!({
            "about_me": true,
            "projects": true,
            "skills": true,
            "process": true,
            "get_in_touch": true,
        })
    );

    let response = put_json_auth(
        app.clone(),
        "/api/v1/admin/sections",
        json!({ "process": false }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = put_json_auth(
        app.clone(),
        "/api/v1/admin/sections",
        json!({ "skills": false }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let sections = fetch(&app, "/api/v1/admin/sections", &token).await;
    assert_eq!(sections["process"], false);
    assert_eq!(sections["skills"], false);
    assert_eq!(sections["projects"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn overview_reports_counts_and_active_singletons(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();

    let hero = create(&app, "/api/v1/admin/heroes", json!({ "full_name": "Ada" }), &token).await;
    create(&app, "/api/v1/admin/projects", json!({ "title": "Folio" }), &token).await;
    create(&app, "/api/v1/admin/projects", json!({ "title": "Other" }), &token).await;

    let overview = fetch(&app, "/api/v1/admin/overview", &token).await;
    assert_eq!(overview["counts"]["heroes"], 1);
    assert_eq!(overview["counts"]["projects"], 2);
    assert_eq!(overview["counts"]["messages"], 0);

    let singletons = overview["singletons"].as_array().unwrap();
    assert_eq!(singletons.len(), 4);
    let hero_entry = singletons.iter().find(|s| s["kind"] == "hero").unwrap();
    assert_eq!(hero_entry["active_id"], hero["id"]);
    let about_entry = singletons.iter().find(|s| s["kind"] == "about").unwrap();
    assert_eq!(about_entry["active_id"], Value::Null);
}

// ---------------------------------------------------------------------------
// Messages inbox
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn messages_cannot_be_created_through_admin(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();

    let response = post_json_auth(
        app,
        "/api/v1/admin/messages",
        json!({ "name": "Ada" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
