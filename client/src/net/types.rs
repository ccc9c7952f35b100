//! Wire types for the login action.
//!
//! DESIGN
//! ======
//! `Credentials` doubles as the form schema: both fields are plain strings with
//! no format or length rules. The server decodes it with serde, so a payload
//! missing a field is rejected there and nowhere else.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Values submitted by the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Email address or username; the schema does not distinguish them.
    pub email: String,
    pub password: String,
}

/// Outcome of a login attempt, as returned by the login action.
///
/// Both fields may be set at once. Nothing enforces exclusivity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmissionResult {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { success: Some(message.into()), error: None }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { success: None, error: Some(message.into()) }
    }
}
