//! API Routes
//!
//! Configures the Axum router with all proxy server endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{health_handler, top_stories_handler, user_handler, AppState};
use crate::hn::HnApi;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /stories?count=N` - Current top stories
/// - `GET /users/:nickname` - A user profile
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router<C>(state: AppState<C>) -> Router
where
    C: HnApi + Clone + Send + Sync + 'static,
{
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/stories", get(top_stories_handler))
        .route("/users/:nickname", get(user_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
