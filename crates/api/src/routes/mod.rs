pub mod auth;
pub mod code_repository;
pub mod environment;
pub mod health;
pub mod project;
pub mod startup;
pub mod storage;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /startup                                         setup state (GET, public),
///                                                  first user + project (POST, public)
///
/// /auth/login                                      login (public)
/// /auth/me                                         own profile
///
/// /projects                                        list mine, create
/// /projects/{id}                                   get, update, delete
/// /projects/{project_id}/environments              list, create
/// /projects/{project_id}/global-variables          list, upsert key
/// /projects/{project_id}/global-variables/grouped  grouped view
/// /projects/{project_id}/global-variables/{key}    delete key
/// /projects/{project_id}/code-repositories         list, create
/// /projects/{project_id}/storages                  list
///
/// /environments/{id}                               update, delete
///
/// /code-repositories/{id}                          get, update, delete
/// /code-repositories/{id}/default                  set as default (POST)
///
/// /storages                                        create
/// /storages/{id}                                   get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/startup", startup::router())
        .nest("/auth", auth::router())
        .nest("/projects", project::router())
        .nest("/environments", environment::router())
        .nest("/code-repositories", code_repository::router())
        .nest("/storages", storage::router())
}
