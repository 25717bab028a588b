//! Handlers for external storage backends.
//!
//! Payloads carry the provider-discriminated union from
//! `opshub_core::storage`; decoding it is the validation step, and the
//! `authConfig` half is persisted verbatim so configs round-trip
//! bit-exact.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use opshub_core::error::CoreError;
use opshub_core::types::DbId;
use opshub_db::models::storage::{CreateStorage, Storage, StorageType, UpdateStorage};
use opshub_db::repositories::StorageRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::access::ensure_project_access;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/projects/{project_id}/storages
pub async fn list_by_project(
    State(state): State<AppState>,
    user: AuthUser,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Storage>>> {
    ensure_project_access(&state.pool, user.user_id, project_id).await?;
    let storages = StorageRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(storages))
}

/// POST /api/storages
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateStorage>,
) -> AppResult<(StatusCode, Json<Storage>)> {
    input.validate()?;
    ensure_project_access(&state.pool, user.user_id, input.project_id).await?;

    let storage = StorageRepo::create(
        &state.pool,
        input.project_id,
        &input.name,
        StorageType::from(&input.auth),
        &input.auth.config_value(),
    )
    .await
    .map_err(|err| match opshub_db::unique_violation(&err) {
        Some(c) if c == "uq_storages_project_name" => AppError::Core(CoreError::Conflict(
            "A storage with this name already exists in the project".into(),
        )),
        _ => AppError::Database(err),
    })?;

    Ok((StatusCode::CREATED, Json(storage)))
}

/// GET /api/storages/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Storage>> {
    let storage = require_storage(&state, id).await?;
    ensure_project_access(&state.pool, user.user_id, storage.project_id).await?;
    Ok(Json(storage))
}

/// PUT /api/storages/{id} -- full replace of name and configuration.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStorage>,
) -> AppResult<Json<Storage>> {
    input.validate()?;
    let storage = require_storage(&state, id).await?;
    ensure_project_access(&state.pool, user.user_id, storage.project_id).await?;

    let storage = StorageRepo::update(
        &state.pool,
        id,
        &input.name,
        StorageType::from(&input.auth),
        &input.auth.config_value(),
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Storage",
        id,
    }))?;
    Ok(Json(storage))
}

/// DELETE /api/storages/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let storage = require_storage(&state, id).await?;
    ensure_project_access(&state.pool, user.user_id, storage.project_id).await?;

    StorageRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn require_storage(state: &AppState, id: DbId) -> AppResult<Storage> {
    StorageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Storage",
            id,
        }))
}
