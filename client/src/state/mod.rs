//! Reactive state models for the client UI.
//!
//! DESIGN
//! ======
//! State types are plain structs with explicit transition methods. Components
//! wrap them in `RwSignal` so every transition notifies the view.

pub mod login;
