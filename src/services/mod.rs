//! Host-side services behind the auth routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! `identity` talks to the hosted identity platform, `google` runs the OAuth
//! code exchange that feeds it, and `session` keeps the cookie-token table.

pub mod google;
pub mod identity;
pub mod session;
