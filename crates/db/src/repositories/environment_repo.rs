//! Repository for the `environments` table.

use opshub_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::environment::{CreateEnvironment, Environment, UpdateEnvironment};

const COLUMNS: &str = "id, project_id, name, created_at, updated_at";

/// Provides CRUD operations for project environments.
pub struct EnvironmentRepo;

impl EnvironmentRepo {
    /// Insert a new environment, returning the created row.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateEnvironment,
    ) -> Result<Environment, sqlx::Error> {
        let query = format!(
            "INSERT INTO environments (id, project_id, name)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Environment>(&query)
            .bind(Uuid::now_v7())
            .bind(project_id)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find an environment by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Environment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM environments WHERE id = $1");
        sqlx::query_as::<_, Environment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's environments in creation order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Environment>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM environments WHERE project_id = $1 ORDER BY created_at");
        sqlx::query_as::<_, Environment>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Rename an environment. Returns `None` if no row exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEnvironment,
    ) -> Result<Option<Environment>, sqlx::Error> {
        let query = format!(
            "UPDATE environments SET
                name = COALESCE($2, name),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Environment>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete an environment; its variable values cascade. Returns `true`
    /// if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM environments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
