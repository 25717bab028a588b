//! Repository for the `code_repositories` table.

use opshub_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::code_repository::{
    CodeRepository, CreateCodeRepository, UpdateCodeRepository,
};

const COLUMNS: &str = "id, project_id, name, provider, url, is_default, created_at, updated_at";

/// Provides CRUD operations for code repository integrations.
pub struct CodeRepositoryRepo;

impl CodeRepositoryRepo {
    /// Insert a new repository. When the new row is flagged default, the
    /// previous default of the project is cleared in the same transaction
    /// (a partial unique index allows at most one default per project).
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateCodeRepository,
    ) -> Result<CodeRepository, sqlx::Error> {
        let is_default = input.is_default.unwrap_or(false);
        let mut tx = pool.begin().await?;

        if is_default {
            sqlx::query(
                "UPDATE code_repositories SET is_default = FALSE, updated_at = NOW()
                 WHERE project_id = $1 AND is_default",
            )
            .bind(project_id)
            .execute(&mut *tx)
            .await?;
        }

        let query = format!(
            "INSERT INTO code_repositories (id, project_id, name, provider, url, is_default)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let repository = sqlx::query_as::<_, CodeRepository>(&query)
            .bind(Uuid::now_v7())
            .bind(project_id)
            .bind(&input.name)
            .bind(input.provider)
            .bind(&input.url)
            .bind(is_default)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(repository)
    }

    /// Find a repository by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CodeRepository>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM code_repositories WHERE id = $1");
        sqlx::query_as::<_, CodeRepository>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's repositories, default first, then by name.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<CodeRepository>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM code_repositories
             WHERE project_id = $1
             ORDER BY is_default DESC, name"
        );
        sqlx::query_as::<_, CodeRepository>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update name/provider/url. Returns `None` if no row exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCodeRepository,
    ) -> Result<Option<CodeRepository>, sqlx::Error> {
        let query = format!(
            "UPDATE code_repositories SET
                name = COALESCE($2, name),
                provider = COALESCE($3, provider),
                url = COALESCE($4, url),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CodeRepository>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.provider)
            .bind(&input.url)
            .fetch_optional(pool)
            .await
    }

    /// Make one repository the project's default, clearing the previous
    /// default in the same transaction. Returns the updated row, or
    /// `None` if the repository does not exist.
    pub async fn set_default(
        pool: &PgPool,
        id: DbId,
        project_id: DbId,
    ) -> Result<Option<CodeRepository>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "UPDATE code_repositories SET is_default = FALSE, updated_at = NOW()
             WHERE project_id = $1 AND is_default AND id <> $2",
        )
        .bind(project_id)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let query = format!(
            "UPDATE code_repositories SET is_default = TRUE, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let repository = sqlx::query_as::<_, CodeRepository>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(repository)
    }

    /// Delete a repository by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM code_repositories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
