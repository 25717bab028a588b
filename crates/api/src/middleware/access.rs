//! Project membership guard.
//!
//! Every project-scoped mutation and read resolves the caller's role in
//! the target project before touching the resource. Id-format validation
//! happens earlier, in the typed `Path` extractor, so malformed ids are
//! rejected before any database lookup.

use opshub_core::error::CoreError;
use opshub_core::types::DbId;
use opshub_db::models::user_project::RoleInProject;
use opshub_db::repositories::{ProjectRepo, UserProjectRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Resolve the caller's role in `project_id`, or reject the request.
///
/// Returns 404 when the project does not exist and 403 when it exists but
/// the caller is not a member. Authorization failures therefore always
/// occur before any mutation is attempted.
pub async fn ensure_project_access(
    pool: &PgPool,
    user_id: DbId,
    project_id: DbId,
) -> AppResult<RoleInProject> {
    if let Some(role) = UserProjectRepo::find_role(pool, user_id, project_id).await? {
        return Ok(role);
    }

    match ProjectRepo::find_by_id(pool, project_id).await? {
        None => Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        })),
        Some(_) => Err(AppError::Core(CoreError::Forbidden(
            "You do not have access to this project".into(),
        ))),
    }
}
