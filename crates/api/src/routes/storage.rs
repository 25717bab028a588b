//! Route definitions for the `/storages` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::storage;
use crate::state::AppState;

/// Routes mounted at `/storages`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(storage::create))
        .route(
            "/{id}",
            get(storage::get_by_id)
                .put(storage::update)
                .delete(storage::delete),
        )
}
