//! Repository for the `global_variables` table.

use opshub_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::global_variable::GlobalVariable;

const COLUMNS: &str = "id, project_id, environment_id, key, value, created_at, updated_at";

/// Provides operations on per-environment variable values. Values are
/// always manipulated one key at a time, across all of its environments.
pub struct GlobalVariableRepo;

impl GlobalVariableRepo {
    /// List all variable values of a project, ordered by key then
    /// insertion time so grouping output is stable.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<GlobalVariable>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM global_variables
             WHERE project_id = $1
             ORDER BY key, created_at"
        );
        sqlx::query_as::<_, GlobalVariable>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Replace every value of one key in one transaction: existing rows
    /// for the key are deleted, then the given (environment, value) pairs
    /// are inserted. Returns the new rows.
    pub async fn replace_key(
        pool: &PgPool,
        project_id: DbId,
        key: &str,
        values: &[(DbId, String)],
    ) -> Result<Vec<GlobalVariable>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM global_variables WHERE project_id = $1 AND key = $2")
            .bind(project_id)
            .bind(key)
            .execute(&mut *tx)
            .await?;

        let insert = format!(
            "INSERT INTO global_variables (id, project_id, environment_id, key, value)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let mut rows = Vec::with_capacity(values.len());
        for (environment_id, value) in values {
            let row = sqlx::query_as::<_, GlobalVariable>(&insert)
                .bind(Uuid::now_v7())
                .bind(project_id)
                .bind(environment_id)
                .bind(key)
                .bind(value)
                .fetch_one(&mut *tx)
                .await?;
            rows.push(row);
        }

        tx.commit().await?;
        Ok(rows)
    }

    /// Delete all values of one key. Returns `true` if any row was removed.
    pub async fn delete_key(
        pool: &PgPool,
        project_id: DbId,
        key: &str,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM global_variables WHERE project_id = $1 AND key = $2")
                .bind(project_id)
                .bind(key)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
