//! HTTP-level integration tests for the `/api/notes` endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    access_token, body_json, delete_auth, get_auth, patch_json_auth, post_json_auth,
    put_json_auth,
};
use sqlx::PgPool;

async fn create_note(app: axum::Router, token: &str, body: serde_json::Value) -> serde_json::Value {
    let response = post_json_auth(app, "/api/notes/", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

async fn category_ids(app: axum::Router, token: &str) -> Vec<i64> {
    let response = get_auth(app, "/api/categories/", token).await;
    body_json(response)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_note_lands_in_first_category(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token(app.clone(), "a@x.com").await;
    let first = category_ids(app.clone(), &token).await[0];

    let json = create_note(app, &token, serde_json::json!({})).await;

    assert_eq!(json["category"], first);
    assert_eq!(json["category_name"], "Random Thoughts");
    assert_eq!(json["category_color"], "#EF9C66");
    assert_eq!(json["title"], "");
    assert_eq!(json["content"], "");
    assert!(json["created_at"].is_string());
    assert!(json["updated_at"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_ignores_supplied_category(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token(app.clone(), "a@x.com").await;
    let ids = category_ids(app.clone(), &token).await;

    let body = serde_json::json!({ "title": "Hi", "content": "there", "category": ids[2] });
    let json = create_note(app, &token, body).await;

    assert_eq!(json["category"], ids[0]);
    assert_eq!(json["title"], "Hi");
    assert_eq!(json["content"], "there");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_without_categories_has_null_category(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token(app.clone(), "a@x.com").await;
    for id in category_ids(app.clone(), &token).await {
        let uri = format!("/api/categories/{id}/");
        delete_auth(app.clone(), &uri, &token).await;
    }

    let json = create_note(app, &token, serde_json::json!({ "title": "Loose" })).await;

    assert!(json["category"].is_null());
    assert!(json["category_name"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn title_over_255_characters_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token(app.clone(), "a@x.com").await;

    let body = serde_json::json!({ "title": "a".repeat(256) });
    let response = post_json_auth(app.clone(), "/api/notes/", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["fields"]["title"].is_array());

    // 255 multi-byte characters still fit.
    let body = serde_json::json!({ "title": "é".repeat(255) });
    let response = post_json_auth(app, "/api/notes/", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_is_scoped_and_filterable(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token(app.clone(), "a@x.com").await;
    let other_token = access_token(app.clone(), "b@x.com").await;
    let ids = category_ids(app.clone(), &token).await;

    let first = create_note(app.clone(), &token, serde_json::json!({ "title": "one" })).await;
    let second = create_note(app.clone(), &token, serde_json::json!({ "title": "two" })).await;
    create_note(app.clone(), &other_token, serde_json::json!({ "title": "theirs" })).await;

    let uri = format!("/api/notes/{}/", second["id"]);
    let body = serde_json::json!({ "category": ids[1] });
    let response = patch_json_auth(app.clone(), &uri, body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(app.clone(), "/api/notes/", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let all = body_json(response).await;
    assert_eq!(all.as_array().unwrap().len(), 2);

    let uri = format!("/api/notes/?category={}", ids[0]);
    let response = get_auth(app, &uri, &token).await;
    let filtered = body_json(response).await;
    let filtered = filtered.as_array().unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["id"], first["id"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_integer_category_filter_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token(app.clone(), "a@x.com").await;

    let response = get_auth(app, "/api/notes/?category=school", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_category_filter_lists_every_note(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token(app.clone(), "a@x.com").await;
    let ids = category_ids(app.clone(), &token).await;
    create_note(app.clone(), &token, serde_json::json!({ "title": "one" })).await;
    let second = create_note(app.clone(), &token, serde_json::json!({ "title": "two" })).await;
    let uri = format!("/api/notes/{}/", second["id"]);
    patch_json_auth(app.clone(), &uri, serde_json::json!({ "category": ids[1] }), &token).await;

    let response = get_auth(app, "/api/notes/?category=", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn null_title_or_content_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token(app.clone(), "a@x.com").await;
    let note = create_note(app.clone(), &token, serde_json::json!({ "title": "kept" })).await;
    let uri = format!("/api/notes/{}/", note["id"]);

    let body = serde_json::json!({ "title": null, "content": null });
    let response = patch_json_auth(app.clone(), &uri, body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["fields"]["title"][0], "This field may not be null.");
    assert_eq!(json["fields"]["content"][0], "This field may not be null.");

    let response = get_auth(app, &uri, &token).await;
    assert_eq!(body_json(response).await["title"], "kept");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_returns_read_shape(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token(app.clone(), "a@x.com").await;
    let ids = category_ids(app.clone(), &token).await;
    let note = create_note(app.clone(), &token, serde_json::json!({ "title": "old" })).await;
    let uri = format!("/api/notes/{}/", note["id"]);

    let body = serde_json::json!({ "title": "new", "category": ids[1] });
    let response = put_json_auth(app.clone(), &uri, body, &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "new");
    assert_eq!(json["category"], ids[1]);
    assert_eq!(json["category_name"], "School");
    assert_eq!(json["category_color"], "#FCDC94");

    // Explicit null clears the category; absent fields are untouched.
    let body = serde_json::json!({ "category": null });
    let response = patch_json_auth(app, &uri, body, &token).await;
    let json = body_json(response).await;
    assert!(json["category"].is_null());
    assert_eq!(json["title"], "new");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_to_foreign_category_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token(app.clone(), "a@x.com").await;
    let other_token = access_token(app.clone(), "b@x.com").await;
    let foreign = category_ids(app.clone(), &other_token).await[0];
    let note = create_note(app.clone(), &token, serde_json::json!({})).await;
    let uri = format!("/api/notes/{}/", note["id"]);

    let body = serde_json::json!({ "category": foreign });
    let response = patch_json_auth(app.clone(), &uri, body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["fields"]["category"].is_array());

    let response = get_auth(app, &uri, &token).await;
    assert_eq!(body_json(response).await["category"], note["category"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn other_accounts_note_is_not_found_and_untouched(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token(app.clone(), "a@x.com").await;
    let intruder = access_token(app.clone(), "b@x.com").await;
    let note = create_note(app.clone(), &token, serde_json::json!({ "title": "mine" })).await;
    let uri = format!("/api/notes/{}/", note["id"]);

    let response = get_auth(app.clone(), &uri, &intruder).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = serde_json::json!({ "title": "stolen" });
    let response = patch_json_auth(app.clone(), &uri, body, &intruder).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_auth(app.clone(), &uri, &intruder).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["title"], "mine");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_update_of_other_accounts_note_is_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token(app.clone(), "a@x.com").await;
    let intruder = access_token(app.clone(), "b@x.com").await;
    let intruder_category = category_ids(app.clone(), &intruder).await[0];
    let note = create_note(app.clone(), &token, serde_json::json!({ "title": "mine" })).await;
    let uri = format!("/api/notes/{}/", note["id"]);

    let body = serde_json::json!({ "title": "a".repeat(256) });
    let response = patch_json_auth(app.clone(), &uri, body, &intruder).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The intruder's own category is foreign to the owner's note, but the
    // note itself is resolved first.
    let body = serde_json::json!({ "category": intruder_category });
    let response = put_json_auth(app.clone(), &uri, body, &intruder).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_auth(app, &uri, &token).await;
    let json = body_json(response).await;
    assert_eq!(json["title"], "mine");
    assert_eq!(json["category"], note["category"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_returns_204(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token(app.clone(), "a@x.com").await;
    let note = create_note(app.clone(), &token, serde_json::json!({})).await;
    let uri = format!("/api/notes/{}/", note["id"]);

    let response = delete_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
