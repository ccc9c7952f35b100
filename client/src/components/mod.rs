//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Small card/form primitives plus the login form that composes them. Only
//! `login_form` owns state; the rest render what they are handed.

pub mod card;
pub mod form_field;
pub mod form_message;
pub mod login_form;
pub mod oauth_buttons;
