//! Mock auth backend for testing.

use crate::auth::traits::{AuthBackend, AuthError};
use crate::auth::types::SessionToken;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// In-memory mock auth backend for testing.
///
/// One-time codes are consumed on first use; each issued token is bound to
/// the fingerprint it was issued for.
#[derive(Clone, Default)]
pub struct MockAuthBackend {
    /// Codes that have not been redeemed yet
    codes: Arc<Mutex<HashSet<String>>>,
    /// Map of token -> fingerprint it is bound to
    sessions: Arc<Mutex<HashMap<String, String>>>,
    /// When set, the next login fails with a network error
    fail_next_login: Arc<Mutex<bool>>,
}

impl MockAuthBackend {
    /// Create a mock backend with no valid codes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock backend accepting the given one-time codes.
    pub fn with_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let backend = Self::default();
        backend.codes.lock().unwrap().extend(codes.into_iter().map(Into::into));
        backend
    }

    /// Add another valid one-time code.
    pub fn add_code(&self, code: impl Into<String>) {
        self.codes.lock().unwrap().insert(code.into());
    }

    /// Invalidate an issued token, as an expiry would.
    pub fn revoke(&self, token: &SessionToken) -> bool {
        self.sessions.lock().unwrap().remove(token.as_str()).is_some()
    }

    /// Make the next login attempt fail with a network error.
    pub fn fail_next_login(&self) {
        *self.fail_next_login.lock().unwrap() = true;
    }

    /// Number of live sessions (for testing).
    pub fn session_count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }
}

#[async_trait]
impl AuthBackend for MockAuthBackend {
    async fn login(&self, code: &str, fingerprint: &str) -> Result<SessionToken, AuthError> {
        if std::mem::take(&mut *self.fail_next_login.lock().unwrap()) {
            return Err(AuthError::Network("connection refused".to_owned()));
        }

        if !self.codes.lock().unwrap().remove(code) {
            return Err(AuthError::Rejected("Invalid or expired code.".to_owned()));
        }

        let token = SessionToken::new(Uuid::new_v4().to_string());
        self.sessions
            .lock()
            .unwrap()
            .insert(token.as_str().to_owned(), fingerprint.to_owned());
        Ok(token)
    }

    async fn verify(&self, token: &SessionToken, fingerprint: &str) -> bool {
        self.sessions
            .lock()
            .unwrap()
            .get(token.as_str())
            .is_some_and(|bound| bound == fingerprint)
    }
}
