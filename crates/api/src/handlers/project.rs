//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use opshub_core::error::CoreError;
use opshub_core::slug::slugify;
use opshub_core::types::DbId;
use opshub_db::models::project::{CreateProject, Project, UpdateProject};
use opshub_db::repositories::ProjectRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::access::ensure_project_access;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/projects
///
/// Creates the project and the creator's OWNER membership in one
/// transaction; a duplicate name maps to 409 instead of a generic 500.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    input.validate()?;
    let slug = slugify(&input.name);
    if slug.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Project name must contain at least one alphanumeric character".into(),
        )));
    }

    let project = ProjectRepo::create_with_owner(&state.pool, &input, &slug, user.user_id)
        .await
        .map_err(|err| {
            match opshub_db::unique_violation(&err) {
                Some(constraint) if constraint.starts_with("uq_projects_") => AppError::Core(
                    CoreError::Conflict("A project with this name already exists".into()),
                ),
                _ => AppError::Database(err),
            }
        })?;

    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects -- only projects the caller is linked to, by name.
pub async fn list_mine(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::find_mine(&state.pool, user.user_id).await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    ensure_project_access(&state.pool, user.user_id, id).await?;
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// PUT /api/projects/{id}
///
/// `description: null` clears the field; omitting it leaves it unchanged.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    input.validate()?;
    ensure_project_access(&state.pool, user.user_id, id).await?;

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    ensure_project_access(&state.pool, user.user_id, id).await?;

    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}
