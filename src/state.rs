//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. Clone
//! is required by Axum; the login action sits behind an `Arc`.

use std::sync::Arc;

use crate::services::login::LoginAction;

#[derive(Clone)]
pub struct AppState {
    pub login: Arc<dyn LoginAction>,
}

impl AppState {
    #[must_use]
    pub fn new(login: Arc<dyn LoginAction>) -> Self {
        Self { login }
    }
}
