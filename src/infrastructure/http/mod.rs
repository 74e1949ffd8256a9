//! HTTP REST API routes

mod error;
mod generate_routes;

use axum::{routing::post, Router};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

pub use error::ApiError;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Generation routes; every other method gets a JSON 405
        .route(
            "/api/generate",
            post(generate_routes::generate_mobs).fallback(generate_routes::method_not_allowed),
        )
}
