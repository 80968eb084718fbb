//! Wire types for the auth backend contract.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque bearer token issued by the backend.
///
/// The token proves an authenticated session; it has no structure the
/// client may rely on. `Debug` deliberately hides the value so tokens do
/// not end up in logs.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token string, for requests back to the backend.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionToken(len={})", self.0.len())
    }
}

/// Body of `POST {base}/login`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// One-time code entered by the user.
    pub code: String,
    /// Device fingerprint the session will be bound to.
    pub fingerprint: String,
}

/// Success body of `POST {base}/login`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: SessionToken,
}

/// Body of `POST {base}/verify`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub token: SessionToken,
    pub fingerprint: String,
}

/// Failure body; the `message` field is optional on the wire.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_token_serializes_transparently() {
        let token = SessionToken::new("abc123");
        assert_eq!(serde_json::to_string(&token).unwrap(), "\"abc123\"");

        let back: SessionToken = serde_json::from_str("\"abc123\"").unwrap();
        assert_eq!(back, token);
    }

    #[test]
    fn test_session_token_debug_hides_value() {
        let token = SessionToken::new("super-secret");
        let rendered = format!("{:?}", token);
        assert!(!rendered.contains("super-secret"));
    }

    #[test]
    fn test_error_body_message_is_optional() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.message.is_none());

        let body: ErrorBody = serde_json::from_str("{\"message\":\"nope\"}").unwrap();
        assert_eq!(body.message.as_deref(), Some("nope"));
    }
}
