//! Login action service.
//!
//! DESIGN
//! ======
//! The route layer talks to a `LoginAction` trait object. Production forwards
//! credentials to an upstream auth backend; tests substitute a mock. Whether
//! the credentials are valid is decided entirely upstream.

use std::sync::Arc;
use std::time::Duration;

use client::net::types::{Credentials, SubmissionResult};

use crate::config::{AuthTimeouts, ServerConfig};

pub const UNAVAILABLE_MESSAGE: &str = "Login is not available.";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials!";

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// The HTTP request to the auth backend failed.
    #[error("auth backend request failed: {0}")]
    Request(String),

    /// The auth backend answered with a status outside 2xx/4xx.
    #[error("auth backend error: status {status}")]
    Upstream { status: u16 },

    /// A 2xx body could not be decoded as a submission result.
    #[error("auth backend response parse failed: {0}")]
    Parse(String),

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Async seam between the login route and whatever checks credentials.
#[async_trait::async_trait]
pub trait LoginAction: Send + Sync {
    /// Attempt a login with the submitted credentials.
    ///
    /// # Errors
    ///
    /// Returns a [`LoginError`] when no result could be obtained at all. A
    /// rejected login is an `Ok` result carrying an error message.
    async fn login(&self, credentials: &Credentials) -> Result<SubmissionResult, LoginError>;
}

/// Stand-in used when no auth backend is configured.
pub struct UnconfiguredLogin;

#[async_trait::async_trait]
impl LoginAction for UnconfiguredLogin {
    async fn login(&self, _credentials: &Credentials) -> Result<SubmissionResult, LoginError> {
        Ok(SubmissionResult::error(UNAVAILABLE_MESSAGE))
    }
}

/// Forwards credentials as JSON to an upstream auth endpoint.
pub struct UpstreamLogin {
    http: reqwest::Client,
    url: String,
}

impl UpstreamLogin {
    /// # Errors
    ///
    /// Returns [`LoginError::HttpClientBuild`] if the HTTP client cannot be constructed.
    pub fn new(url: String, timeouts: AuthTimeouts) -> Result<Self, LoginError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LoginError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl LoginAction for UpstreamLogin {
    async fn login(&self, credentials: &Credentials) -> Result<SubmissionResult, LoginError> {
        let resp = self
            .http
            .post(&self.url)
            .json(credentials)
            .send()
            .await
            .map_err(|e| LoginError::Request(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| LoginError::Request(e.to_string()))?;
        interpret_upstream(status, &body)
    }
}

/// Map an upstream status and body onto a submission result.
///
/// 2xx bodies pass through as-is. 4xx bodies pass through when they carry a
/// message, otherwise they become a generic invalid-credentials error.
/// Anything else is a service failure.
pub(crate) fn interpret_upstream(status: u16, body: &str) -> Result<SubmissionResult, LoginError> {
    match status {
        200..=299 => serde_json::from_str(body).map_err(|e| LoginError::Parse(e.to_string())),
        400..=499 => {
            let result = serde_json::from_str::<SubmissionResult>(body)
                .ok()
                .filter(|r| r.success.is_some() || r.error.is_some())
                .unwrap_or_else(|| SubmissionResult::error(INVALID_CREDENTIALS_MESSAGE));
            Ok(result)
        }
        _ => Err(LoginError::Upstream { status }),
    }
}

/// Pick the login action for this configuration.
///
/// # Errors
///
/// Returns a [`LoginError`] if the upstream HTTP client cannot be built.
pub fn from_config(config: &ServerConfig) -> Result<Arc<dyn LoginAction>, LoginError> {
    match &config.auth_backend_url {
        Some(url) => {
            let upstream = UpstreamLogin::new(url.clone(), config.auth_timeouts)?;
            tracing::info!(url = upstream.url(), "login action forwarding to auth backend");
            Ok(Arc::new(upstream))
        }
        None => {
            tracing::warn!("AUTH_BACKEND_URL not set; login attempts will be refused");
            Ok(Arc::new(UnconfiguredLogin))
        }
    }
}

#[cfg(test)]
#[path = "login_test.rs"]
mod tests;
