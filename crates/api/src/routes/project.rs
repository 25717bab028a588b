//! Route definitions for the `/projects` resource.
//!
//! Also nests the project-scoped collection routes for environments,
//! global variables, code repositories, and storages under
//! `/projects/{project_id}/...`.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::{code_repository, environment, global_variable, project, storage};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                       -> list_mine
/// POST   /                                       -> create
/// GET    /{id}                                   -> get_by_id
/// PUT    /{id}                                   -> update
/// DELETE /{id}                                   -> delete
///
/// GET    /{project_id}/environments              -> list_by_project
/// POST   /{project_id}/environments              -> create
///
/// GET    /{project_id}/global-variables          -> list_by_project
/// POST   /{project_id}/global-variables          -> upsert
/// GET    /{project_id}/global-variables/grouped  -> list_grouped
/// DELETE /{project_id}/global-variables/{key}    -> delete_key
///
/// GET    /{project_id}/code-repositories         -> list_by_project
/// POST   /{project_id}/code-repositories         -> create
///
/// GET    /{project_id}/storages                  -> list_by_project
/// ```
pub fn router() -> Router<AppState> {
    let environment_routes = Router::new().route(
        "/",
        get(environment::list_by_project).post(environment::create),
    );

    let global_variable_routes = Router::new()
        .route(
            "/",
            get(global_variable::list_by_project).post(global_variable::upsert),
        )
        .route("/grouped", get(global_variable::list_grouped))
        .route("/{key}", delete(global_variable::delete_key));

    let code_repository_routes = Router::new().route(
        "/",
        get(code_repository::list_by_project).post(code_repository::create),
    );

    let storage_routes = Router::new().route("/", get(storage::list_by_project));

    Router::new()
        .route("/", get(project::list_mine).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .nest("/{project_id}/environments", environment_routes)
        .nest("/{project_id}/global-variables", global_variable_routes)
        .nest("/{project_id}/code-repositories", code_repository_routes)
        .nest("/{project_id}/storages", storage_routes)
}
