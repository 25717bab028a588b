//! Handlers for code repository integrations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use opshub_core::error::CoreError;
use opshub_core::types::DbId;
use opshub_db::models::code_repository::{
    CodeRepository, CreateCodeRepository, UpdateCodeRepository,
};
use opshub_db::repositories::CodeRepositoryRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::access::ensure_project_access;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/projects/{project_id}/code-repositories
pub async fn list_by_project(
    State(state): State<AppState>,
    user: AuthUser,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<CodeRepository>>> {
    ensure_project_access(&state.pool, user.user_id, project_id).await?;
    let repositories = CodeRepositoryRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(repositories))
}

/// POST /api/projects/{project_id}/code-repositories
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateCodeRepository>,
) -> AppResult<(StatusCode, Json<CodeRepository>)> {
    input.validate()?;
    ensure_project_access(&state.pool, user.user_id, project_id).await?;

    let repository = CodeRepositoryRepo::create(&state.pool, project_id, &input)
        .await
        .map_err(|err| match opshub_db::unique_violation(&err) {
            Some(c) if c == "uq_code_repositories_project_name" => {
                AppError::Core(CoreError::Conflict(
                    "A repository with this name already exists in the project".into(),
                ))
            }
            _ => AppError::Database(err),
        })?;

    Ok((StatusCode::CREATED, Json(repository)))
}

/// GET /api/code-repositories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<CodeRepository>> {
    let repository = require_repository(&state, id).await?;
    ensure_project_access(&state.pool, user.user_id, repository.project_id).await?;
    Ok(Json(repository))
}

/// PUT /api/code-repositories/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCodeRepository>,
) -> AppResult<Json<CodeRepository>> {
    input.validate()?;
    let repository = require_repository(&state, id).await?;
    ensure_project_access(&state.pool, user.user_id, repository.project_id).await?;

    let repository = CodeRepositoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CodeRepository",
            id,
        }))?;
    Ok(Json(repository))
}

/// POST /api/code-repositories/{id}/default
///
/// Marks the repository as the project default, clearing the previous
/// default atomically.
pub async fn set_default(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<CodeRepository>> {
    let repository = require_repository(&state, id).await?;
    ensure_project_access(&state.pool, user.user_id, repository.project_id).await?;

    let repository = CodeRepositoryRepo::set_default(&state.pool, id, repository.project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CodeRepository",
            id,
        }))?;
    Ok(Json(repository))
}

/// DELETE /api/code-repositories/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let repository = require_repository(&state, id).await?;
    ensure_project_access(&state.pool, user.user_id, repository.project_id).await?;

    CodeRepositoryRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn require_repository(state: &AppState, id: DbId) -> AppResult<CodeRepository> {
    CodeRepositoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CodeRepository",
            id,
        }))
}
