//! Auth backend trait definition.

use crate::auth::types::SessionToken;
use async_trait::async_trait;
use thiserror::Error;

/// Fallback shown when the backend rejects a login without a message.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed.";

/// Errors from login attempts.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The backend rejected the login. Carries the backend's message when
    /// one was present, otherwise [`LOGIN_FAILED_MESSAGE`].
    #[error("{0}")]
    Rejected(String),

    /// The request never produced a usable response.
    #[error("network error: {0}")]
    Network(String),
}

/// Trait for the remote auth backend.
///
/// The backend itself is an external collaborator; this trait covers the
/// two calls the client consumes. Implementations:
/// - `HttpAuthClient` for the real backend
/// - `MockAuthBackend` for testing
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Exchange a one-time code and device fingerprint for a session token.
    async fn login(&self, code: &str, fingerprint: &str) -> Result<SessionToken, AuthError>;

    /// Check that a token is still valid for this device.
    ///
    /// Every kind of failure (network, 4xx, 5xx) collapses to `false`; the
    /// caller cannot and must not distinguish them.
    async fn verify(&self, token: &SessionToken, fingerprint: &str) -> bool;
}
