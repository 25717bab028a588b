//! Code repository integration entity model and DTOs.

use opshub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Supported source-control providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "code_repository_provider", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CodeRepositoryProvider {
    Github,
    Gitlab,
    AzureDevOps,
}

/// A code repository row from the `code_repositories` table.
///
/// `is_default` serializes as `default` -- the field name existing clients
/// read.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeRepository {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub provider: CodeRepositoryProvider,
    pub url: String,
    #[serde(rename = "default")]
    pub is_default: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a repository with a project.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCodeRepository {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub provider: CodeRepositoryProvider,
    #[validate(url)]
    pub url: String,
    /// Defaults to false if omitted.
    #[serde(rename = "default")]
    pub is_default: Option<bool>,
}

/// DTO for updating a repository. All fields are optional; the default
/// flag is switched through the dedicated set-default operation instead.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCodeRepository {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub provider: Option<CodeRepositoryProvider>,
    #[validate(url)]
    pub url: Option<String>,
}
