//! Gateway state: unredeemed codes and issued sessions.

use minegrid_core::SessionToken;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Shared gateway state.
#[derive(Clone, Default)]
pub struct GatewayState {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    /// Codes that have not been redeemed yet
    codes: HashSet<String>,
    /// Map of token -> fingerprint it was issued for
    sessions: HashMap<String, String>,
}

impl GatewayState {
    /// Create state accepting the given one-time codes.
    pub fn with_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let state = Self::default();
        state
            .inner
            .lock()
            .unwrap()
            .codes
            .extend(codes.into_iter().map(Into::into));
        state
    }

    /// Register another one-time code.
    pub fn add_code(&self, code: impl Into<String>) {
        self.inner.lock().unwrap().codes.insert(code.into());
    }

    /// Redeem a code: consume it and mint a token bound to the fingerprint.
    /// Returns `None` for unknown or already-redeemed codes.
    pub fn redeem_code(&self, code: &str, fingerprint: &str) -> Option<SessionToken> {
        let mut inner = self.inner.lock().unwrap();

        if !inner.codes.remove(code.trim()) {
            return None;
        }

        let token = SessionToken::new(Uuid::new_v4().to_string());
        inner
            .sessions
            .insert(token.as_str().to_owned(), fingerprint.to_owned());
        Some(token)
    }

    /// Whether the token is live and bound to this fingerprint.
    pub fn verify(&self, token: &SessionToken, fingerprint: &str) -> bool {
        self.inner
            .lock()
            .unwrap()
            .sessions
            .get(token.as_str())
            .is_some_and(|bound| bound == fingerprint)
    }

    /// End a session, as an expiry would. Returns whether it existed.
    pub fn revoke(&self, token: &SessionToken) -> bool {
        self.inner
            .lock()
            .unwrap()
            .sessions
            .remove(token.as_str())
            .is_some()
    }

    /// Number of live sessions.
    pub fn session_count(&self) -> usize {
        self.inner.lock().unwrap().sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_redeems_exactly_once() {
        let state = GatewayState::with_codes(["otp-1"]);

        let token = state.redeem_code("otp-1", "device-a");
        assert!(token.is_some());
        assert!(state.redeem_code("otp-1", "device-a").is_none());
    }

    #[test]
    fn test_unknown_code_is_refused() {
        let state = GatewayState::default();
        assert!(state.redeem_code("nope", "device-a").is_none());
    }

    #[test]
    fn test_code_is_trimmed_before_lookup() {
        let state = GatewayState::with_codes(["otp-1"]);
        assert!(state.redeem_code(" otp-1 ", "device-a").is_some());
    }

    #[test]
    fn test_token_verifies_only_for_issuing_fingerprint() {
        let state = GatewayState::with_codes(["otp-1"]);
        let token = state.redeem_code("otp-1", "device-a").unwrap();

        assert!(state.verify(&token, "device-a"));
        assert!(!state.verify(&token, "device-b"));
    }

    #[test]
    fn test_revoked_token_stops_verifying() {
        let state = GatewayState::with_codes(["otp-1"]);
        let token = state.redeem_code("otp-1", "device-a").unwrap();

        assert!(state.revoke(&token));
        assert!(!state.revoke(&token));
        assert!(!state.verify(&token, "device-a"));
        assert_eq!(state.session_count(), 0);
    }
}
