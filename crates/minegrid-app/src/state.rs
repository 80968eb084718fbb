//! Application state management.

use minegrid_core::{PredictorState, RouteGuard};
use std::sync::{Arc, RwLock};

/// Shared application state: the route guard plus the predictor
/// view-model. All of it is process-scoped; a restart is a fresh session
/// except for the token, which the guard's store persists.
#[derive(Clone)]
pub struct AppState {
    guard: Arc<RouteGuard>,
    predictor: Arc<RwLock<PredictorState>>,
}

impl AppState {
    pub fn new(guard: RouteGuard) -> Self {
        Self {
            guard: Arc::new(guard),
            predictor: Arc::new(RwLock::new(PredictorState::new())),
        }
    }

    pub fn guard(&self) -> &RouteGuard {
        &self.guard
    }

    pub fn predictor(&self) -> &RwLock<PredictorState> {
        &self.predictor
    }
}
