//! HTTP-level integration tests for the user directory.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, patch_json, post_json, seed_user};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn create_and_fetch_user(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/users",
        serde_json::json!({"name": "Alice", "email": "alice@example.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["name"], "Alice");

    let fetched = body_json(get(build_test_app(pool.clone()), &format!("/users/{id}")).await).await;
    assert_eq!(fetched["email"], "alice@example.com");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_email_is_409(pool: PgPool) {
    seed_user(&pool, "Alice", "alice@example.com").await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/users",
        serde_json::json!({"name": "Another Alice", "email": "alice@example.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_to_duplicate_email_is_409(pool: PgPool) {
    seed_user(&pool, "Alice", "alice@example.com").await;
    let bob = seed_user(&pool, "Bob", "bob@example.com").await;

    let response = patch_json(
        build_test_app(pool.clone()),
        &format!("/users/{bob}"),
        serde_json::json!({"email": "alice@example.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_email_is_400(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/users",
        serde_json::json!({"name": "Alice", "email": "not-an-email"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn partial_update_keeps_other_fields(pool: PgPool) {
    let id = seed_user(&pool, "Alice", "alice@example.com").await;

    let updated = body_json(
        patch_json(
            build_test_app(pool.clone()),
            &format!("/users/{id}"),
            serde_json::json!({"name": "Alice B."}),
        )
        .await,
    )
    .await;
    assert_eq!(updated["name"], "Alice B.");
    assert_eq!(updated["email"], "alice@example.com");

    let updated = body_json(
        patch_json(
            build_test_app(pool.clone()),
            &format!("/users/{id}"),
            serde_json::json!({"email": "alice.b@example.com"}),
        )
        .await,
    )
    .await;
    assert_eq!(updated["name"], "Alice B.");
    assert_eq!(updated["email"], "alice.b@example.com");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_returns_all_users(pool: PgPool) {
    seed_user(&pool, "Alice", "alice@example.com").await;
    seed_user(&pool, "Bob", "bob@example.com").await;

    let json = body_json(get(build_test_app(pool.clone()), "/users").await).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

// Fetch of a missing user is 404; update and delete of a missing user are
// 400. The asymmetry is deliberate.

#[sqlx::test(migrations = "../db/migrations")]
async fn fetch_unknown_user_is_404(pool: PgPool) {
    let response = get(build_test_app(pool.clone()), "/users/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_unknown_user_is_400(pool: PgPool) {
    let response = patch_json(
        build_test_app(pool.clone()),
        "/users/999999",
        serde_json::json!({"name": "Ghost"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_unknown_user_is_400(pool: PgPool) {
    let response = delete(build_test_app(pool.clone()), "/users/999999").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_then_fetch_is_404(pool: PgPool) {
    let id = seed_user(&pool, "Alice", "alice@example.com").await;

    let response = delete(build_test_app(pool.clone()), &format!("/users/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(build_test_app(pool.clone()), &format!("/users/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
