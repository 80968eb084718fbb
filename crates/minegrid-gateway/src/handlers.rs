//! HTTP handlers for the gateway contract.

use crate::state::GatewayState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use minegrid_core::{ErrorBody, LoginRequest, LoginResponse, VerifyRequest};
use tracing::info;

/// `POST /login` — exchange a one-time code for a session token.
pub async fn login(
    State(state): State<GatewayState>,
    Json(request): Json<LoginRequest>,
) -> impl IntoResponse {
    match state.redeem_code(&request.code, &request.fingerprint) {
        Some(token) => {
            info!("issued session token");
            (StatusCode::OK, Json(LoginResponse { token })).into_response()
        }
        None => (
            StatusCode::UNAUTHORIZED,
            Json(ErrorBody { message: Some("Invalid or expired code.".to_owned()) }),
        )
            .into_response(),
    }
}

/// `POST /verify` — token liveness check. Success carries no body; any
/// failure is a plain 401.
pub async fn verify(
    State(state): State<GatewayState>,
    Json(request): Json<VerifyRequest>,
) -> StatusCode {
    if state.verify(&request.token, &request.fingerprint) {
        StatusCode::OK
    } else {
        StatusCode::UNAUTHORIZED
    }
}

/// `GET /health` — readiness probe.
pub async fn health() -> &'static str {
    "ok"
}
