//! First-startup provisioning.
//!
//! A fresh database has no users, so nothing can authenticate. The
//! startup flow creates the first user together with their initial
//! project in a single transaction, and refuses to run once any user
//! exists.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::project::Project;
use crate::models::user::{CreateUser, User};
use crate::models::user_project::RoleInProject;

const USER_COLUMNS: &str =
    "id, email, display_name, password_hash, is_active, created_at, updated_at";
const PROJECT_COLUMNS: &str = "id, name, slug, description, is_active, created_at, updated_at";

pub struct StartupRepo;

impl StartupRepo {
    /// Whether at least one user exists. Drives the first-startup gate.
    pub async fn any_user_exists(pool: &PgPool) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users)")
            .fetch_one(pool)
            .await
    }

    /// Create the first user, their initial project, and the OWNER
    /// membership link, all in one transaction.
    ///
    /// Returns `None` without inserting anything if a user already exists.
    /// An advisory lock serializes concurrent setup requests, so exactly
    /// one of them wins.
    pub async fn create_first_user_and_project(
        pool: &PgPool,
        user_input: &CreateUser,
        project_name: &str,
        slug: &str,
    ) -> Result<Option<(User, Project)>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Transaction-scoped lock; released automatically on commit/rollback.
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext('first_startup'))")
            .execute(&mut *tx)
            .await?;

        let already_initialized: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users)")
                .fetch_one(&mut *tx)
                .await?;
        if already_initialized {
            return Ok(None);
        }

        let user_query = format!(
            "INSERT INTO users (id, email, display_name, password_hash)
             VALUES ($1, $2, $3, $4)
             RETURNING {USER_COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&user_query)
            .bind(Uuid::now_v7())
            .bind(&user_input.email)
            .bind(&user_input.display_name)
            .bind(&user_input.password_hash)
            .fetch_one(&mut *tx)
            .await?;

        let project_query = format!(
            "INSERT INTO projects (id, name, slug)
             VALUES ($1, $2, $3)
             RETURNING {PROJECT_COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&project_query)
            .bind(Uuid::now_v7())
            .bind(project_name)
            .bind(slug)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO user_projects (id, user_id, project_id, role)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(Uuid::now_v7())
        .bind(user.id)
        .bind(project.id)
        .bind(RoleInProject::Owner)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some((user, project)))
    }
}
