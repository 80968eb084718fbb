//! Route guard state machine.
//!
//! Decides, for each navigation, whether the protected view may render.
//! The guard owns the session store and the auth backend; the fingerprint
//! is captured once at construction and reused for every call.

use crate::auth::{AuthBackend, AuthError, SessionToken};
use crate::fingerprint::FingerprintProvider;
use crate::session::store::SessionStore;
use std::sync::Arc;
use tracing::info;

/// Lifecycle state of the protected route.
///
/// Every mount of the protected view starts in `Checking` and resolves to
/// one of the other two; `Authenticated` is terminal until the next mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Checking,
    Authenticated,
    Unauthenticated,
}

/// Navigable routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Home,
}

impl Route {
    /// URL path for the route.
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Home => "/home",
        }
    }
}

/// Route guard over a session store and auth backend.
pub struct RouteGuard {
    store: Arc<dyn SessionStore>,
    backend: Arc<dyn AuthBackend>,
    fingerprint: String,
}

impl RouteGuard {
    /// Create a guard; the fingerprint is computed once, here.
    pub fn new(
        store: Arc<dyn SessionStore>,
        backend: Arc<dyn AuthBackend>,
        fingerprint: &dyn FingerprintProvider,
    ) -> Self {
        Self { store, backend, fingerprint: fingerprint.visitor_id() }
    }

    /// The fingerprint this guard binds sessions to.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Whether the store currently holds a token. Says nothing about
    /// whether the token would verify.
    pub fn has_token(&self) -> bool {
        self.store.token().is_some()
    }

    /// Where the root path sends the user: token present goes to the
    /// protected route, otherwise to login. Never verifies.
    pub fn resolve_root(&self) -> Route {
        if self.has_token() {
            Route::Home
        } else {
            Route::Login
        }
    }

    /// Redirect target for the login route, if any: a stored token sends
    /// the user straight to the protected route.
    pub fn resolve_login(&self) -> Option<Route> {
        self.has_token().then_some(Route::Home)
    }

    /// Mount the protected route: verify the stored token against the
    /// backend. A failed verification clears the token, making the failure
    /// indistinguishable from never having logged in.
    pub async fn enter_protected(&self) -> GuardState {
        let Some(token) = self.store.token() else {
            return GuardState::Unauthenticated;
        };

        if self.backend.verify(&token, &self.fingerprint).await {
            GuardState::Authenticated
        } else {
            self.store.clear();
            info!("session verification failed, token cleared");
            GuardState::Unauthenticated
        }
    }

    /// Submit a one-time code. On success the returned token is persisted;
    /// on failure the store is untouched and the error carries the message
    /// to show near the form.
    pub async fn login(&self, code: &str) -> Result<SessionToken, AuthError> {
        let token = self.backend.login(code, &self.fingerprint).await?;
        self.store.set_token(token.clone());
        info!("login succeeded, session persisted");
        Ok(token)
    }
}
