//! Auth routes: the login action endpoint.

use axum::extract::State;
use axum::response::Json;
use client::net::types::{Credentials, SubmissionResult};

use crate::state::AppState;

/// Shown when the login action fails without producing a result.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong!";

/// `POST /api/auth/login`: run the login action and report its outcome.
///
/// Always answers with a `SubmissionResult`; service failures collapse into
/// [`GENERIC_FAILURE_MESSAGE`]. Bodies that do not match `Credentials` are
/// rejected by the `Json` extractor before this runs.
pub async fn login(State(state): State<AppState>, Json(credentials): Json<Credentials>) -> Json<SubmissionResult> {
    tracing::debug!(email = %credentials.email, "login attempt");

    match state.login.login(&credentials).await {
        Ok(result) => {
            tracing::info!(outcome = outcome_label(&result), "login settled");
            Json(result)
        }
        Err(e) => {
            tracing::error!(error = %e, "login action failed");
            Json(SubmissionResult::error(GENERIC_FAILURE_MESSAGE))
        }
    }
}

pub(crate) fn outcome_label(result: &SubmissionResult) -> &'static str {
    match (&result.success, &result.error) {
        (Some(_), Some(_)) => "mixed",
        (Some(_), None) => "success",
        (None, Some(_)) => "error",
        (None, None) => "empty",
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
