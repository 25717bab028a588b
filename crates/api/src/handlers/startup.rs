//! Handlers for the first-startup flow.
//!
//! A fresh deployment has no users; clients poll the initialization
//! state and, while it is false, offer a setup form that creates the
//! first user together with their initial project. Both endpoints are
//! public: there is nobody to authenticate yet.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use opshub_core::error::CoreError;
use opshub_core::slug::slugify;
use opshub_db::models::project::Project;
use opshub_db::models::user::{CreateUser, UserResponse};
use opshub_db::repositories::StartupRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /api/startup`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFirstUser {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    /// Name of the initial project.
    #[validate(length(min = 3, max = 255))]
    pub project: String,
}

/// Response for a completed setup.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupResponse {
    pub user: UserResponse,
    pub project: Project,
}

/// GET /api/startup
///
/// Whether setup has been completed, i.e. at least one user exists.
pub async fn initialized(State(state): State<AppState>) -> AppResult<Json<bool>> {
    let exists = StartupRepo::any_user_exists(&state.pool).await?;
    Ok(Json(exists))
}

/// POST /api/startup
///
/// Create the first user and their initial project in one transaction.
/// Rejected with 409 once any user exists.
pub async fn create_first_user_and_project(
    State(state): State<AppState>,
    Json(input): Json<CreateFirstUser>,
) -> AppResult<(StatusCode, Json<StartupResponse>)> {
    input.validate()?;
    let slug = slugify(&input.project);
    if slug.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Project name must contain at least one alphanumeric character".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    // The display name starts as the email's local part; the user can
    // change it later.
    let display_name = input
        .email
        .split('@')
        .next()
        .unwrap_or(input.email.as_str())
        .to_string();

    let user_input = CreateUser {
        email: input.email.clone(),
        display_name,
        password_hash,
    };

    let created = StartupRepo::create_first_user_and_project(
        &state.pool,
        &user_input,
        &input.project,
        &slug,
    )
    .await
    .map_err(|err| match opshub_db::unique_violation(&err) {
        Some(c) if c.starts_with("uq_projects_") => AppError::Core(CoreError::Conflict(
            "A project with this name already exists".into(),
        )),
        Some(c) if c == "uq_users_email" => AppError::Core(CoreError::Conflict(
            "A user with this email already exists".into(),
        )),
        _ => AppError::Database(err),
    })?;

    match created {
        Some((user, project)) => {
            tracing::info!(user_id = %user.id, project_id = %project.id, "First-startup setup completed");
            Ok((
                StatusCode::CREATED,
                Json(StartupResponse {
                    user: user.into(),
                    project,
                }),
            ))
        }
        None => Err(AppError::Core(CoreError::Conflict(
            "Setup has already been completed".into(),
        ))),
    }
}
