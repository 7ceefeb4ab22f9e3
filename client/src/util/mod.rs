//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (timers, document
//! styling) and page flows from component markup to improve reuse and
//! testability.

pub mod auth;
pub mod format;
pub mod notify;
pub mod routes;
pub mod scroll_lock;
pub mod ticker;
