//! Networking modules for the auth HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the raw HTTP calls, `session` wraps them behind the
//! `SessionService` trait that page flows depend on, and `types` defines the
//! shared wire schema.

pub mod api;
pub mod session;
pub mod types;
