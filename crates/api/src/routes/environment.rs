//! Route definitions for environment rows addressed by their own id.

use axum::routing::put;
use axum::Router;

use crate::handlers::environment;
use crate::state::AppState;

/// Routes mounted at `/environments`.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        put(environment::update).delete(environment::delete),
    )
}
