//! Route definitions for code repositories addressed by their own id.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::code_repository;
use crate::state::AppState;

/// Routes mounted at `/code-repositories`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(code_repository::get_by_id)
                .put(code_repository::update)
                .delete(code_repository::delete),
        )
        .route("/{id}/default", post(code_repository::set_default))
}
