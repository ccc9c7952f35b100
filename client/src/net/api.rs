//! REST helpers for the login action.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the action is only
//! invoked from browser event handlers.
//!
//! ERROR HANDLING
//! ==============
//! A settled action always carries a `SubmissionResult`. `Err` here means the
//! call itself failed (transport error, non-OK status, unreadable body), which
//! the form treats as an unhandled failure rather than a banner message.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Credentials, SubmissionResult};

/// Path of the login action endpoint.
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    format!("login request failed: {status}")
}

/// Invoke the login action via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds with
/// a non-OK status, or the body is not a `SubmissionResult`.
#[allow(clippy::unused_async)]
pub async fn login(credentials: &Credentials) -> Result<SubmissionResult, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(credentials)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        resp.json::<SubmissionResult>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err("not available on server".to_owned())
    }
}
