//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `login`/`signup` are public entry screens; everything else renders inside
//! `components::dashboard_layout` under `/dashboard`. Page content is typed
//! fixture data declared next to the page that shows it.

pub mod ai_verification;
pub mod data_auditing;
pub mod features;
pub mod integrations;
pub mod login;
pub mod not_found;
pub mod overview;
pub mod realtime;
pub mod regulatory;
pub mod reports;
pub mod settings;
pub mod signup;
pub mod support;
