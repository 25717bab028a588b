//! Repository for the `user_projects` membership table.

use opshub_core::types::DbId;
use sqlx::PgPool;

use crate::models::user_project::{RoleInProject, UserProject};

const COLUMNS: &str = "id, user_id, project_id, role, created_at";

/// Provides lookups on project memberships. Membership rows are created
/// inside the project-creation transaction (see `ProjectRepo`).
pub struct UserProjectRepo;

impl UserProjectRepo {
    /// Resolve the role a user holds in a project, if any.
    pub async fn find_role(
        pool: &PgPool,
        user_id: DbId,
        project_id: DbId,
    ) -> Result<Option<RoleInProject>, sqlx::Error> {
        sqlx::query_scalar::<_, RoleInProject>(
            "SELECT role FROM user_projects WHERE user_id = $1 AND project_id = $2",
        )
        .bind(user_id)
        .bind(project_id)
        .fetch_optional(pool)
        .await
    }

    /// List all memberships of a project.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<UserProject>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_projects WHERE project_id = $1 ORDER BY created_at"
        );
        sqlx::query_as::<_, UserProject>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
