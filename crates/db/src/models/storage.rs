//! External storage backend entity model and DTOs.

use opshub_core::storage::StorageAuth;
use opshub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Storage provider discriminant, mirroring the `type` tag of
/// [`StorageAuth`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "storage_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorageType {
    Aws,
    Azure,
    Google,
}

impl From<&StorageAuth> for StorageType {
    fn from(auth: &StorageAuth) -> Self {
        match auth {
            StorageAuth::Aws(_) => StorageType::Aws,
            StorageAuth::Azure(_) => StorageType::Azure,
            StorageAuth::Google(_) => StorageType::Google,
        }
    }
}

/// A storage row from the `storages` table. `config` holds the
/// provider-specific `authConfig` JSON verbatim.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Storage {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub storage_type: StorageType,
    pub config: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for attaching a storage backend to a project. The flattened
/// [`StorageAuth`] contributes the `type` and `authConfig` fields.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStorage {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub project_id: DbId,
    #[serde(flatten)]
    pub auth: StorageAuth,
}

/// DTO for replacing a storage backend's name and configuration.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStorage {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(flatten)]
    pub auth: StorageAuth,
}
