//! HTTP handlers: page routes with guard semantics, plus the JSON API the
//! pages call.

use crate::pages;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use minegrid_core::{GuardState, MineCount, Route, ThreadRandom};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Application error type: a status code and a message the UI shows
/// near the triggering control.
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: message.into() }
    }

    fn unauthorized(message: impl Into<String>) -> Self {
        Self { status: StatusCode::UNAUTHORIZED, message: message.into() }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse { message: self.message })).into_response()
    }
}

// === Page routes ===

/// `GET /` — redirect-only: token present goes to the protected route,
/// otherwise to login. No verification happens here.
pub async fn root_redirect(State(state): State<AppState>) -> Redirect {
    Redirect::temporary(state.guard().resolve_root().path())
}

/// `GET /login` — public; redirects away when a token already exists.
pub async fn login_page(State(state): State<AppState>) -> Response {
    match state.guard().resolve_login() {
        Some(route) => Redirect::temporary(route.path()).into_response(),
        None => Html(pages::login_page()).into_response(),
    }
}

/// `GET /home` — protected; every mount re-runs verification.
pub async fn home_page(State(state): State<AppState>) -> Response {
    match state.guard().enter_protected().await {
        GuardState::Authenticated => {
            let predictor = state.predictor().read().unwrap();
            Html(pages::home_page(&predictor)).into_response()
        }
        // Silent redirect: a failed verification looks exactly like
        // never having logged in.
        _ => Redirect::temporary(Route::Login.path()).into_response(),
    }
}

// === API routes ===

#[derive(Deserialize)]
pub struct ApiLoginRequest {
    pub code: String,
}

#[derive(Serialize)]
pub struct ApiLoginResponse {
    pub status: &'static str,
}

/// `POST /api/login` — one login request at a time; the page disables the
/// submit control while one is in flight.
pub async fn api_login(
    State(state): State<AppState>,
    Json(request): Json<ApiLoginRequest>,
) -> Result<Json<ApiLoginResponse>, AppError> {
    let code = request.code.trim();
    if code.is_empty() {
        // Mirrors the disabled submit: an empty code never reaches the backend.
        return Err(AppError::bad_request("Enter your one-time code."));
    }

    match state.guard().login(code).await {
        Ok(_) => Ok(Json(ApiLoginResponse { status: "ok" })),
        Err(err) => Err(AppError::unauthorized(err.to_string())),
    }
}

#[derive(Deserialize)]
pub struct PredictRequest {
    pub server_seed: String,
    /// Captured but computationally unused.
    #[serde(default)]
    pub bet_amount: Option<String>,
    pub mines: MineCount,
}

#[derive(Serialize)]
pub struct PredictResponse {
    pub cells: Vec<u8>,
    pub bets_made: u64,
}

/// `POST /api/predict` — local validation, then a fresh selection.
/// Prediction never calls the backend, so the gate is token presence only.
pub async fn api_predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, AppError> {
    if !state.guard().has_token() {
        return Err(AppError::unauthorized("Not logged in."));
    }

    if let Some(amount) = &request.bet_amount {
        debug!(%amount, "bet amount recorded");
    }

    let mut rng = ThreadRandom;
    let mut predictor = state.predictor().write().unwrap();
    let selected = predictor
        .submit(&request.server_seed, request.mines, &mut rng)
        .map(|cells| {
            let mut cells: Vec<u8> = cells.iter().copied().collect();
            cells.sort_unstable();
            cells
        })
        .map_err(|err| AppError::bad_request(err.to_string()))?;

    Ok(Json(PredictResponse { cells: selected, bets_made: predictor.bets_made() }))
}

#[derive(Serialize)]
pub struct StateResponse {
    pub authenticated: bool,
    pub bets_made: u64,
    pub selected: Vec<u8>,
}

/// `GET /api/state` — current view state for the pages and tests.
pub async fn api_state(State(state): State<AppState>) -> Json<StateResponse> {
    let predictor = state.predictor().read().unwrap();
    let mut selected: Vec<u8> = predictor.selected().iter().copied().collect();
    selected.sort_unstable();

    Json(StateResponse {
        authenticated: state.guard().has_token(),
        bets_made: predictor.bets_made(),
        selected,
    })
}
