//! Integration tests for the first-startup flow.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::*;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_fresh_database_reports_uninitialized(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = get_anonymous(app, "/api/startup").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!(false));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_setup_creates_first_user_and_project(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json_anonymous(
        app,
        "/api/startup",
        json!({
            "email": "admin@example.com",
            "password": "hunter2hunter2",
            "project": "Phoenix"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["user"]["email"], "admin@example.com");
    assert_eq!(body["user"]["displayName"], "admin");
    assert!(body["user"].get("passwordHash").is_none());
    assert_eq!(body["project"]["name"], "Phoenix");
    assert_eq!(body["project"]["slug"], "phoenix");

    // The setup gate flips.
    let app = build_test_app(pool.clone());
    let response = get_anonymous(app, "/api/startup").await;
    assert_eq!(body_json(response).await, json!(true));

    // The created credentials work for a normal login.
    let app = build_test_app(pool.clone());
    let response = post_json_anonymous(
        app,
        "/api/auth/login",
        json!({"email": "admin@example.com", "password": "hunter2hunter2"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let token = body_json(response).await["token"]
        .as_str()
        .unwrap()
        .to_string();

    // And the first user owns the initial project.
    let app = build_test_app(pool.clone());
    let response = get(app, "/api/projects", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let projects = body_json(response).await;
    assert_eq!(projects.as_array().unwrap().len(), 1);
    assert_eq!(projects[0]["name"], "Phoenix");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_setup_rolls_back_if_project_insert_fails(pool: PgPool) {
    // Seed a bare project row so the setup's project insert hits the name
    // unique constraint after the user insert has already succeeded.
    sqlx::query("INSERT INTO projects (id, name, slug) VALUES ($1, 'Phoenix', 'phoenix')")
        .bind(uuid::Uuid::now_v7())
        .execute(&pool)
        .await
        .unwrap();

    let app = build_test_app(pool.clone());
    let response = post_json_anonymous(
        app,
        "/api/startup",
        json!({
            "email": "admin@example.com",
            "password": "hunter2hunter2",
            "project": "Phoenix"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // The user insert rolled back with the failed transaction.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_second_setup_is_conflict(pool: PgPool) {
    for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
        let app = build_test_app(pool.clone());
        let response = post_json_anonymous(
            app,
            "/api/startup",
            json!({
                "email": "admin@example.com",
                "password": "hunter2hunter2",
                "project": "Phoenix"
            }),
        )
        .await;
        assert_eq!(response.status(), expected);
    }

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_setup_validates_input(pool: PgPool) {
    // Password below the minimum length.
    let app = build_test_app(pool.clone());
    let response = post_json_anonymous(
        app,
        "/api/startup",
        json!({
            "email": "admin@example.com",
            "password": "short",
            "project": "Phoenix"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Malformed email.
    let app = build_test_app(pool.clone());
    let response = post_json_anonymous(
        app,
        "/api/startup",
        json!({
            "email": "not-an-email",
            "password": "hunter2hunter2",
            "project": "Phoenix"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Project name below the minimum length.
    let app = build_test_app(pool.clone());
    let response = post_json_anonymous(
        app,
        "/api/startup",
        json!({
            "email": "admin@example.com",
            "password": "hunter2hunter2",
            "project": "ab"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing was created by any of the rejected attempts.
    let app = build_test_app(pool.clone());
    let response = get_anonymous(app, "/api/startup").await;
    assert_eq!(body_json(response).await, json!(false));
}
