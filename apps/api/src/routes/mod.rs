pub mod health;

use axum::{routing::get, Router};

use crate::extract::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // The single trigger surface: one parameterless batch run per request.
        .route("/", get(handlers::handle_run_batch))
        .with_state(state)
}
