//! Membership link between a user and a project.

use opshub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Role a user holds within a single project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "role_in_project", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleInProject {
    Owner,
    Member,
}

/// A membership row from the `user_projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProject {
    pub id: DbId,
    pub user_id: DbId,
    pub project_id: DbId,
    pub role: RoleInProject,
    pub created_at: Timestamp,
}
