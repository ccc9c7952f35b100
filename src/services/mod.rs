//! Business-logic services used by route handlers.

pub mod login;
