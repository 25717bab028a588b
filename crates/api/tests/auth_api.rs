//! Integration tests for login and request authentication.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::*;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_returns_token_and_user(pool: PgPool) {
    let (user, _) = seed_user(&pool, "alice@example.com").await;

    let app = build_test_app(pool.clone());
    let response = post_json_anonymous(
        app,
        "/api/auth/login",
        json!({"email": "alice@example.com", "password": "hunter2hunter2"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["token"].as_str().unwrap().len() > 20);
    assert_eq!(body["expiresIn"], 3600);
    assert_eq!(body["user"]["id"], user.id.to_string());
    assert_eq!(body["user"]["email"], "alice@example.com");
    // The password hash must never leave the server.
    assert!(body["user"].get("passwordHash").is_none());
    assert!(body["user"].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password_is_unauthorized(pool: PgPool) {
    seed_user(&pool, "alice@example.com").await;

    let app = build_test_app(pool.clone());
    let response = post_json_anonymous(
        app,
        "/api/auth/login",
        json!({"email": "alice@example.com", "password": "not-the-password"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["code"], "UNAUTHORIZED");
    // Same message as an unknown email so the two cases are
    // indistinguishable to a caller.
    assert_eq!(body["message"], "Invalid email or password");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_unknown_email_is_unauthorized(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json_anonymous(
        app,
        "/api/auth/login",
        json!({"email": "nobody@example.com", "password": "whatever"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid email or password");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_protected_routes_require_token(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = get_anonymous(app, "/api/projects").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_garbage_token_is_rejected(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = get(app, "/api/projects", "not.a.jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_returns_own_profile(pool: PgPool) {
    let (user, token) = seed_user(&pool, "alice@example.com").await;

    let app = build_test_app(pool.clone());
    let response = get(app, "/api/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["id"], user.id.to_string());
    assert_eq!(body["email"], "alice@example.com");
    assert!(body.get("passwordHash").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_with_deleted_user_is_not_found(pool: PgPool) {
    let (user, token) = seed_user(&pool, "alice@example.com").await;

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();

    // The token still verifies, but the subject no longer exists.
    let app = build_test_app(pool.clone());
    let response = get(app, "/api/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_endpoint_is_public(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = get_anonymous(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}
