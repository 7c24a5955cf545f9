//! HTTP-level integration tests for the `/api/categories` resource.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, book_body, create_category, delete_auth, get_auth, post_json_auth,
    post_raw_auth,
};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn create_then_get_round_trips(pool: PgPool) {
    let token = admin_token(&pool).await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/categories",
        serde_json::json!({ "name": "Fiction" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["message"], "Category created successfully");
    assert_eq!(created["data"]["name"], "Fiction");
    assert_eq!(created["data"]["created_by"], "admin");
    assert_eq!(created["data"]["modified_by"], "admin");

    let id = created["data"]["id"].as_i64().unwrap();
    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/categories/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["data"], created["data"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_is_ordered_by_id(pool: PgPool) {
    let token = admin_token(&pool).await;
    let a = create_category(&pool, &token, "Alpha").await;
    let b = create_category(&pool, &token, "Beta").await;

    let response = get_auth(common::build_test_app(pool), "/api/categories", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let ids: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![a, b]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_name_fails_validation(pool: PgPool) {
    let token = admin_token(&pool).await;
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/categories",
        serde_json::json!({ "name": "" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Validation failed");
    assert_eq!(json["error"], "name is required");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_json_returns_400(pool: PgPool) {
    let token = admin_token(&pool).await;
    let response = post_raw_auth(
        common::build_test_app(pool),
        "/api/categories",
        "{ not json",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Invalid request body");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_and_missing_ids(pool: PgPool) {
    let token = admin_token(&pool).await;

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/categories/abc",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Invalid category ID");

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/categories/9999",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Category not found");

    let response = delete_auth(common::build_test_app(pool), "/api/categories/9999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_then_get_returns_404(pool: PgPool) {
    let token = admin_token(&pool).await;
    let id = create_category(&pool, &token, "Temporary").await;

    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/categories/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Category deleted successfully");
    assert!(json.get("data").is_none());

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/categories/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_books_by_category(pool: PgPool) {
    let token = admin_token(&pool).await;
    let fiction = create_category(&pool, &token, "Fiction").await;
    let science = create_category(&pool, &token, "Science").await;

    for (title, category) in [("One", fiction), ("Two", science), ("Three", fiction)] {
        let response = post_json_auth(
            common::build_test_app(pool.clone()),
            "/api/books",
            book_body(title, 50, Some(category)),
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/categories/{fiction}/books"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let titles: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["One", "Three"]);
    assert_eq!(json["data"][0]["category_name"], "Fiction");

    let response = get_auth(
        common::build_test_app(pool),
        "/api/categories/9999/books",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleting_category_keeps_its_books(pool: PgPool) {
    let token = admin_token(&pool).await;
    let category = create_category(&pool, &token, "Doomed").await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/books",
        book_body("Survivor", 80, Some(category)),
        &token,
    )
    .await;
    let book_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/categories/{category}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/books/{book_id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"]["category_id"].is_null());
    assert!(json["data"].get("category_name").is_none());
}
