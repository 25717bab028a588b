//! Repository for the `storages` table.

use opshub_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::storage::{Storage, StorageType};

const COLUMNS: &str = r#"id, project_id, name, type, config, created_at, updated_at"#;

/// Provides CRUD operations for external storage backends. The `config`
/// JSON is validated against the provider union before it reaches this
/// layer and is stored verbatim.
pub struct StorageRepo;

impl StorageRepo {
    /// Insert a new storage backend, returning the created row.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        name: &str,
        storage_type: StorageType,
        config: &serde_json::Value,
    ) -> Result<Storage, sqlx::Error> {
        let query = format!(
            "INSERT INTO storages (id, project_id, name, type, config)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Storage>(&query)
            .bind(Uuid::now_v7())
            .bind(project_id)
            .bind(name)
            .bind(storage_type)
            .bind(config)
            .fetch_one(pool)
            .await
    }

    /// Find a storage backend by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Storage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM storages WHERE id = $1");
        sqlx::query_as::<_, Storage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's storage backends by name.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Storage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM storages WHERE project_id = $1 ORDER BY name");
        sqlx::query_as::<_, Storage>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Replace a storage backend's name, provider, and configuration.
    /// Returns `None` if no row exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        name: &str,
        storage_type: StorageType,
        config: &serde_json::Value,
    ) -> Result<Option<Storage>, sqlx::Error> {
        let query = format!(
            "UPDATE storages SET name = $2, type = $3, config = $4, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Storage>(&query)
            .bind(id)
            .bind(name)
            .bind(storage_type)
            .bind(config)
            .fetch_optional(pool)
            .await
    }

    /// Delete a storage backend by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM storages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
