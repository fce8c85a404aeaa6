use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::SharedState;

/// Build the Axum router with all routes and middleware.
pub fn create_router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check (outside /api prefix)
        .route("/health", get(handlers::health))
        // Frequent positions
        .route("/api/positions", get(handlers::list_positions))
        // Move generation and validation
        .route("/api/moves", post(handlers::generate_moves))
        .route("/api/validate", post(handlers::validate_fen))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
