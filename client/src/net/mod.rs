//! Networking modules for the login action.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP call and `types` defines the shared wire schema used
//! by both the browser and the server endpoint.

pub mod api;
pub mod types;
