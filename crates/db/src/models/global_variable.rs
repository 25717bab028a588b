//! Global (environment) variable entity model and DTOs.

use opshub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// One variable value row: a key's value in one environment of a project.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalVariable {
    pub id: DbId,
    pub project_id: DbId,
    pub environment_id: DbId,
    pub key: String,
    pub value: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One per-environment value in an upsert payload. A missing or empty
/// `value` means "no value for this environment" and the row is dropped.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalVariableValue {
    pub environment_id: DbId,
    pub value: Option<String>,
}

/// DTO replacing all values of one variable key across environments.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertGlobalVariable {
    #[validate(length(min = 1, max = 255))]
    pub key: String,
    pub values: Vec<GlobalVariableValue>,
}
