//! Repository for the `projects` table.

use opshub_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::models::user_project::RoleInProject;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, slug, description, is_active, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project together with its owning membership link, in
    /// one transaction. The creator becomes OWNER of the project.
    ///
    /// If either insert fails the transaction aborts and neither row
    /// persists. `is_active` defaults to true when omitted in the input.
    pub async fn create_with_owner(
        pool: &PgPool,
        input: &CreateProject,
        slug: &str,
        creator_id: DbId,
    ) -> Result<Project, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO projects (id, name, slug, description, is_active)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(Uuid::now_v7())
            .bind(&input.name)
            .bind(slug)
            .bind(&input.description)
            .bind(input.is_active.unwrap_or(true))
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO user_projects (id, user_id, project_id, role)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(Uuid::now_v7())
        .bind(creator_id)
        .bind(project.id)
        .bind(RoleInProject::Owner)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(project)
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the projects a user is a member of, sorted by name.
    pub async fn find_mine(pool: &PgPool, user_id: DbId) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT p.{} FROM projects p
             JOIN user_projects up ON up.project_id = p.id
             WHERE up.user_id = $1
             ORDER BY p.name",
            COLUMNS.replace(", ", ", p.")
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Omitted fields are left unchanged; an explicit
    /// `description: null` clears the column.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($2, name),
                is_active = COALESCE($3, is_active),
                description = CASE WHEN $4 THEN $5 ELSE description END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.is_active)
            .bind(input.description.is_some())
            .bind(input.description.clone().flatten())
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Memberships, environments, variables,
    /// repositories, and storages cascade. Returns `true` if a row was
    /// removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
