//! Shared helpers for HTTP-level integration tests.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the router
//! without an actual TCP listener. The router is built through the same
//! [`build_app_router`] the production binary uses, so the full middleware
//! stack is exercised.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use sqlx::PgPool;
use tower::ServiceExt;

use lendit_api::config::ServerConfig;
use lendit_api::router::build_app_router;
use lendit_api::state::AppState;
use lendit_core::types::DbId;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: Vec::new(),
        request_timeout_secs: 30,
        lock_item_on_approve: false,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Same as [`build_test_app`] but with the approval availability side
/// effect enabled.
#[allow(dead_code)]
pub fn build_test_app_with_lock(pool: PgPool) -> Router {
    let mut config = test_config();
    config.lock_item_on_approve = true;
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a request with no body and no caller header.
#[allow(dead_code)]
pub async fn get(app: Router, path: &str) -> Response<Body> {
    send(app, Method::GET, path, None, None).await
}

/// Send a GET acting as the given user.
#[allow(dead_code)]
pub async fn get_as(app: Router, path: &str, user_id: DbId) -> Response<Body> {
    send(app, Method::GET, path, Some(user_id), None).await
}

/// Send a JSON POST with no caller header.
#[allow(dead_code)]
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, path, None, Some(body)).await
}

/// Send a JSON POST acting as the given user.
#[allow(dead_code)]
pub async fn post_json_as(
    app: Router,
    path: &str,
    user_id: DbId,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, path, Some(user_id), Some(body)).await
}

/// Send a JSON PATCH with no caller header.
#[allow(dead_code)]
pub async fn patch_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, path, None, Some(body)).await
}

/// Send a JSON PATCH acting as the given user.
#[allow(dead_code)]
pub async fn patch_json_as(
    app: Router,
    path: &str,
    user_id: DbId,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PATCH, path, Some(user_id), Some(body)).await
}

/// Send a bodyless PATCH acting as the given user (booking replies).
#[allow(dead_code)]
pub async fn patch_as(app: Router, path: &str, user_id: DbId) -> Response<Body> {
    send(app, Method::PATCH, path, Some(user_id), None).await
}

/// Send a DELETE with no caller header.
#[allow(dead_code)]
pub async fn delete(app: Router, path: &str) -> Response<Body> {
    send(app, Method::DELETE, path, None, None).await
}

async fn send(
    app: Router,
    method: Method,
    path: &str,
    user_id: Option<DbId>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(user_id) = user_id {
        builder = builder.header("X-Sharer-User-Id", user_id.to_string());
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    use http_body_util::BodyExt;
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a user through the API and return its id.
#[allow(dead_code)]
pub async fn seed_user(pool: &PgPool, name: &str, email: &str) -> DbId {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/users",
        serde_json::json!({"name": name, "email": email}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Insert a booking directly through the repository, bypassing the
/// creation-time window validation. Needed to stage past or running
/// rentals, which the API refuses to create.
#[allow(dead_code)]
pub async fn seed_booking(
    pool: &PgPool,
    item_id: DbId,
    booker_id: DbId,
    start: chrono::DateTime<chrono::Utc>,
    end: chrono::DateTime<chrono::Utc>,
    status: &str,
) -> DbId {
    use lendit_db::models::booking::CreateBooking;
    use lendit_db::repositories::BookingRepo;

    let booking = BookingRepo::create(
        pool,
        &CreateBooking {
            item_id,
            booker_id,
            start_date: start,
            end_date: end,
            status: status.to_string(),
        },
    )
    .await
    .unwrap();
    booking.id
}

/// Create an item through the API and return its id.
#[allow(dead_code)]
pub async fn seed_item(pool: &PgPool, owner_id: DbId, name: &str, available: bool) -> DbId {
    let app = build_test_app(pool.clone());
    let response = post_json_as(
        app,
        "/items",
        owner_id,
        serde_json::json!({
            "name": name,
            "description": format!("{name} description"),
            "available": available,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["id"].as_i64().unwrap()
}
