//! Handlers for per-environment project variables.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use indexmap::IndexMap;
use opshub_core::error::CoreError;
use opshub_core::types::DbId;
use opshub_core::variables::{group_by_key, GroupedVariable, VariableRecord};
use opshub_db::models::global_variable::{GlobalVariable, UpsertGlobalVariable};
use opshub_db::repositories::{EnvironmentRepo, GlobalVariableRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::access::ensure_project_access;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/projects/{project_id}/global-variables -- flat records.
pub async fn list_by_project(
    State(state): State<AppState>,
    user: AuthUser,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<GlobalVariable>>> {
    ensure_project_access(&state.pool, user.user_id, project_id).await?;
    let variables = GlobalVariableRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(variables))
}

/// GET /api/projects/{project_id}/global-variables/grouped
///
/// The table-rendering shape: one entry per key with a value per
/// environment, filtered to environments that still exist.
pub async fn list_grouped(
    State(state): State<AppState>,
    user: AuthUser,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<IndexMap<String, GroupedVariable>>> {
    ensure_project_access(&state.pool, user.user_id, project_id).await?;

    let environments = EnvironmentRepo::list_by_project(&state.pool, project_id).await?;
    let known: Vec<DbId> = environments.iter().map(|e| e.id).collect();

    let records: Vec<VariableRecord> =
        GlobalVariableRepo::list_by_project(&state.pool, project_id)
            .await?
            .into_iter()
            .map(|v| VariableRecord {
                key: v.key,
                environment_id: v.environment_id,
                value: v.value,
            })
            .collect();

    Ok(Json(group_by_key(&records, &known)))
}

/// POST /api/projects/{project_id}/global-variables
///
/// Replaces every value of one key atomically. Entries with a blank or
/// absent value are dropped; entries naming an environment outside the
/// project, or naming the same environment twice, are rejected.
pub async fn upsert(
    State(state): State<AppState>,
    user: AuthUser,
    Path(project_id): Path<DbId>,
    Json(input): Json<UpsertGlobalVariable>,
) -> AppResult<Json<Vec<GlobalVariable>>> {
    input.validate()?;
    ensure_project_access(&state.pool, user.user_id, project_id).await?;

    let environments = EnvironmentRepo::list_by_project(&state.pool, project_id).await?;
    let known: Vec<DbId> = environments.iter().map(|e| e.id).collect();

    let mut seen: Vec<DbId> = Vec::with_capacity(input.values.len());
    let mut values = Vec::with_capacity(input.values.len());
    for entry in &input.values {
        if !known.contains(&entry.environment_id) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Environment {} does not belong to this project",
                entry.environment_id
            ))));
        }
        if seen.contains(&entry.environment_id) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Environment {} appears more than once",
                entry.environment_id
            ))));
        }
        seen.push(entry.environment_id);
        match &entry.value {
            Some(value) if !value.is_empty() => {
                values.push((entry.environment_id, value.clone()));
            }
            _ => {} // no value for this environment
        }
    }

    let rows = GlobalVariableRepo::replace_key(&state.pool, project_id, &input.key, &values).await?;
    Ok(Json(rows))
}

/// DELETE /api/projects/{project_id}/global-variables/{key}
///
/// Removes all values of the key. Idempotent: deleting an absent key is
/// still a 204.
pub async fn delete_key(
    State(state): State<AppState>,
    user: AuthUser,
    Path((project_id, key)): Path<(DbId, String)>,
) -> AppResult<StatusCode> {
    ensure_project_access(&state.pool, user.user_id, project_id).await?;

    GlobalVariableRepo::delete_key(&state.pool, project_id, &key).await?;
    Ok(StatusCode::NO_CONTENT)
}
