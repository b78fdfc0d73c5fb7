//! Tweet cleansing HTTP API server (Axum).
//!
//! Exposes the cleanser over form and CSV upload endpoints plus
//! health monitoring. Lexicons are loaded before the router is built.

pub mod error;
pub mod routes;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use state::AppState;

/// Build the application router with a prepared state.
pub fn app_with_state(state: AppState) -> Router {
    let body_limit = state.batch.max_upload_bytes;
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::cleansing_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
