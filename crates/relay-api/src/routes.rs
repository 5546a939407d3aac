//! # Routes
//!
//! Axum router configuration for the payment relay.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /                    - Landing page
/// - GET  /health              - Health check
/// - GET  /validation-key.txt  - Domain validation key
/// - POST /approve             - Relay payment approval upstream
/// - POST /complete            - Relay payment completion upstream
pub fn create_router(state: AppState) -> Router {
    // The Pi Browser calls /approve and /complete cross-origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health))
        .route("/validation-key.txt", get(handlers::validation_key))
        .route("/approve", post(handlers::approve))
        .route("/complete", post(handlers::complete))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
