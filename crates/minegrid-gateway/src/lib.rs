//! Minegrid Gateway Service
//!
//! Reference implementation of the auth backend the app consumes: one-time
//! login codes exchanged for session tokens bound to a device fingerprint.

pub mod handlers;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

pub use state::GatewayState;

/// Build the gateway router.
pub fn create_router(state: GatewayState) -> Router {
    Router::new()
        .route("/login", post(handlers::login))
        .route("/verify", post(handlers::verify))
        .route("/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
