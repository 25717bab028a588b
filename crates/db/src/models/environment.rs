//! Environment entity model and DTOs.

use opshub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An environment row from the `environments` table (e.g. staging,
/// production).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new environment.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnvironment {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

/// DTO for renaming an environment.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEnvironment {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
}
