//! Route definitions for the first-startup flow (public).

use axum::routing::get;
use axum::Router;

use crate::handlers::startup;
use crate::state::AppState;

/// Routes mounted at `/startup`.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(startup::initialized).post(startup::create_first_user_and_project),
    )
}
