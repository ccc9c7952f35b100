//! Login form state: controlled field values plus submission feedback.
//!
//! DESIGN
//! ======
//! A submission moves the form `idle -> pending -> idle` with the banners set
//! from whatever the login action returned. Pending is counted per in-flight
//! submission, so it only clears once every outstanding call has settled.
//! Results are applied in settle order with no staleness check: when two
//! submissions overlap, the one that settles last owns the banners.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::types::{Credentials, SubmissionResult};

/// Component-local state for the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFormState {
    pub email: String,
    pub password: String,
    /// Success banner text. Empty hides the banner.
    pub success: String,
    /// Error banner text. Empty hides the banner.
    pub error: String,
    in_flight: u32,
}

impl LoginFormState {
    /// Whether any submission is still waiting on the login action.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.in_flight > 0
    }

    /// Number of submissions that have not settled yet.
    #[must_use]
    pub fn in_flight(&self) -> u32 {
        self.in_flight
    }

    /// Current value of a form field by its wire name.
    #[must_use]
    pub fn field(&self, name: &str) -> &str {
        match name {
            "email" => &self.email,
            "password" => &self.password,
            _ => "",
        }
    }

    /// Overwrite a form field by its wire name. Unknown names are ignored.
    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "email" => self.email = value,
            "password" => self.password = value,
            _ => {}
        }
    }

    /// Snapshot of the current field values.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials { email: self.email.clone(), password: self.password.clone() }
    }

    /// Start a submission: clear both banners, enter pending, and return the
    /// exact values to hand to the login action.
    ///
    /// There is no guard against overlapping submissions; the view disables
    /// the submit button instead.
    pub fn begin_submit(&mut self) -> Credentials {
        self.error.clear();
        self.success.clear();
        self.in_flight += 1;
        self.credentials()
    }

    /// Apply a settled login result.
    ///
    /// Both banners are written unconditionally. An absent field becomes an
    /// empty string, so a result carrying both fields shows both banners.
    pub fn settle(&mut self, result: SubmissionResult) {
        self.success = result.success.unwrap_or_default();
        self.error = result.error.unwrap_or_default();
        self.finish();
    }

    /// Settle a submission whose call failed without producing a result.
    /// Banners keep whatever they currently show.
    pub fn abandon(&mut self) {
        self.finish();
    }

    #[must_use]
    pub fn shows_success(&self) -> bool {
        !self.success.is_empty()
    }

    #[must_use]
    pub fn shows_error(&self) -> bool {
        !self.error.is_empty()
    }

    fn finish(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}
