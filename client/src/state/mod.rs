//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `ui`, `toast`, `progress`,
//! `integrations`) so individual components can depend on small focused
//! models. None of these types touch the browser; pages wrap them in
//! `RwSignal`s and drive them from event handlers and timers.

pub mod auth;
pub mod integrations;
pub mod progress;
pub mod toast;
pub mod ui;
