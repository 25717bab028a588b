//! Integration tests for the `/api/projects` resource.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::*;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_project_links_creator_as_owner(pool: PgPool) {
    let (user, token) = seed_user(&pool, "alice@example.com").await;

    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/projects",
        &token,
        json!({"name": "Phoenix Platform", "description": "internal tools"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["name"], "Phoenix Platform");
    assert_eq!(body["slug"], "phoenix-platform");
    assert_eq!(body["description"], "internal tools");
    assert_eq!(body["isActive"], true);

    let project_id: uuid::Uuid = body["id"].as_str().unwrap().parse().unwrap();
    let role: String = sqlx::query_scalar(
        "SELECT role::text FROM user_projects WHERE user_id = $1 AND project_id = $2",
    )
    .bind(user.id)
    .bind(project_id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(role, "OWNER");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_duplicate_name_is_conflict(pool: PgPool) {
    let (_, token) = seed_user(&pool, "alice@example.com").await;
    create_project(&pool, &token, "Phoenix").await;

    let app = build_test_app(pool.clone());
    let response = post_json(app, "/api/projects", &token, json!({"name": "Phoenix"})).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = body_json(response).await;
    assert_eq!(body["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_project_rejects_blank_name(pool: PgPool) {
    let (_, token) = seed_user(&pool, "alice@example.com").await;

    let app = build_test_app(pool.clone());
    let response = post_json(app, "/api/projects", &token, json!({"name": ""})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // A name with no alphanumeric characters produces an empty slug.
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/api/projects", &token, json!({"name": "---"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_only_shows_member_projects(pool: PgPool) {
    let (_, alice) = seed_user(&pool, "alice@example.com").await;
    let (_, bob) = seed_user(&pool, "bob@example.com").await;

    create_project(&pool, &alice, "Zebra").await;
    create_project(&pool, &alice, "Apple").await;
    create_project(&pool, &bob, "Bob Project").await;

    let app = build_test_app(pool.clone());
    let response = get(app, "/api/projects", &alice).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Apple", "Zebra"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_member_gets_forbidden(pool: PgPool) {
    let (_, alice) = seed_user(&pool, "alice@example.com").await;
    let (_, bob) = seed_user(&pool, "bob@example.com").await;
    let project = create_project(&pool, &alice, "Secret").await;
    let id = project["id"].as_str().unwrap();

    let app = build_test_app(pool.clone());
    let response = get(app, &format!("/api/projects/{id}"), &bob).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_project_is_not_found(pool: PgPool) {
    let (_, token) = seed_user(&pool, "alice@example.com").await;

    let app = build_test_app(pool.clone());
    let id = uuid::Uuid::now_v7();
    let response = get(app, &format!("/api/projects/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_malformed_id_is_client_error(pool: PgPool) {
    let (_, token) = seed_user(&pool, "alice@example.com").await;

    let app = build_test_app(pool.clone());
    let response = get(app, "/api/projects/not-a-uuid", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_description_three_states(pool: PgPool) {
    let (_, token) = seed_user(&pool, "alice@example.com").await;
    let project = create_project(&pool, &token, "Phoenix").await;
    let id = project["id"].as_str().unwrap().to_string();

    // Set a description.
    let app = build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/projects/{id}"),
        &token,
        json!({"description": "first"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["description"], "first");

    // Omitting the field leaves it untouched.
    let app = build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/projects/{id}"),
        &token,
        json!({"name": "Phoenix Renamed"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["description"], "first");
    assert_eq!(body["name"], "Phoenix Renamed");
    // Renaming never changes the slug.
    assert_eq!(body["slug"], "phoenix");

    // Explicit null clears it.
    let app = build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/projects/{id}"),
        &token,
        json!({"description": null}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["description"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_project_then_gone(pool: PgPool) {
    let (_, token) = seed_user(&pool, "alice@example.com").await;
    let project = create_project(&pool, &token, "Doomed").await;
    let id = project["id"].as_str().unwrap().to_string();

    let app = build_test_app(pool.clone());
    let response = delete(app, &format!("/api/projects/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = build_test_app(pool.clone());
    let response = get(app, &format!("/api/projects/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The membership row cascades away with the project.
    let memberships: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM user_projects WHERE project_id = $1")
            .bind(id.parse::<uuid::Uuid>().unwrap())
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(memberships, 0);
}
