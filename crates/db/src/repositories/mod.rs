//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod code_repository_repo;
pub mod environment_repo;
pub mod global_variable_repo;
pub mod project_repo;
pub mod startup_repo;
pub mod storage_repo;
pub mod user_project_repo;
pub mod user_repo;

pub use code_repository_repo::CodeRepositoryRepo;
pub use environment_repo::EnvironmentRepo;
pub use global_variable_repo::GlobalVariableRepo;
pub use project_repo::ProjectRepo;
pub use startup_repo::StartupRepo;
pub use storage_repo::StorageRepo;
pub use user_project_repo::UserProjectRepo;
pub use user_repo::UserRepo;
