//! HTTP client for the auth backend.
//!
//! This module provides the real implementation of `AuthBackend` that talks
//! to the configured backend over JSON.

use crate::auth::traits::{AuthBackend, AuthError, LOGIN_FAILED_MESSAGE};
use crate::auth::types::{ErrorBody, LoginRequest, LoginResponse, SessionToken, VerifyRequest};
use async_trait::async_trait;
use reqwest::Client;

/// HTTP client for the auth backend.
pub struct HttpAuthClient {
    /// HTTP client
    client: Client,
    /// Backend base URL, without a trailing slash
    base_url: String,
}

impl HttpAuthClient {
    /// Create a new client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client: Client::new(), base_url }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl AuthBackend for HttpAuthClient {
    async fn login(&self, code: &str, fingerprint: &str) -> Result<SessionToken, AuthError> {
        let request = LoginRequest {
            code: code.to_owned(),
            fingerprint: fingerprint.to_owned(),
        };

        let response = self
            .client
            .post(self.endpoint("login"))
            .json(&request)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if response.status().is_success() {
            let body: LoginResponse = response
                .json()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;
            Ok(body.token)
        } else {
            // Surface the backend's message when it sent one.
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_owned());
            Err(AuthError::Rejected(message))
        }
    }

    async fn verify(&self, token: &SessionToken, fingerprint: &str) -> bool {
        let request = VerifyRequest {
            token: token.clone(),
            fingerprint: fingerprint.to_owned(),
        };

        // Response body is ignored; only HTTP-level success counts.
        self.client
            .post(self.endpoint("verify"))
            .json(&request)
            .send()
            .await
            .map(|response| response.status().is_success())
            .unwrap_or(false)
    }
}
