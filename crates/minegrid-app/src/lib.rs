//! Minegrid App Service
//!
//! HTTP service with web UI: a guarded login screen and the predictor
//! screen. The service is the client of the external auth backend; no
//! backend call ever happens for a prediction.

pub mod handlers;
pub mod pages;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

pub use state::AppState;

/// Build the app router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root_redirect))
        .route("/login", get(handlers::login_page))
        .route("/home", get(handlers::home_page))
        .route("/api/login", post(handlers::api_login))
        .route("/api/predict", post(handlers::api_predict))
        .route("/api/state", get(handlers::api_state))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
