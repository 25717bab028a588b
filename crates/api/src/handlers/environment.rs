//! Handlers for project environments.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use opshub_core::error::CoreError;
use opshub_core::types::DbId;
use opshub_db::models::environment::{CreateEnvironment, Environment, UpdateEnvironment};
use opshub_db::repositories::EnvironmentRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::access::ensure_project_access;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/projects/{project_id}/environments
pub async fn list_by_project(
    State(state): State<AppState>,
    user: AuthUser,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Environment>>> {
    ensure_project_access(&state.pool, user.user_id, project_id).await?;
    let environments = EnvironmentRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(environments))
}

/// POST /api/projects/{project_id}/environments
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateEnvironment>,
) -> AppResult<(StatusCode, Json<Environment>)> {
    input.validate()?;
    ensure_project_access(&state.pool, user.user_id, project_id).await?;

    let environment = EnvironmentRepo::create(&state.pool, project_id, &input)
        .await
        .map_err(|err| match opshub_db::unique_violation(&err) {
            Some(c) if c == "uq_environments_project_name" => AppError::Core(CoreError::Conflict(
                "An environment with this name already exists in the project".into(),
            )),
            _ => AppError::Database(err),
        })?;

    Ok((StatusCode::CREATED, Json(environment)))
}

/// PUT /api/environments/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEnvironment>,
) -> AppResult<Json<Environment>> {
    input.validate()?;
    let environment = require_environment(&state, id).await?;
    ensure_project_access(&state.pool, user.user_id, environment.project_id).await?;

    let environment = EnvironmentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Environment",
            id,
        }))?;
    Ok(Json(environment))
}

/// DELETE /api/environments/{id} -- variable values in the environment
/// cascade away with it.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let environment = require_environment(&state, id).await?;
    ensure_project_access(&state.pool, user.user_id, environment.project_id).await?;

    EnvironmentRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn require_environment(state: &AppState, id: DbId) -> AppResult<Environment> {
    EnvironmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Environment",
            id,
        }))
}
