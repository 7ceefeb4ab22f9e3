//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the dashboard header to show who is signed in. Routes are not
//! gated on it: every dashboard path renders whether or not a user is
//! present.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Two-letter avatar initials for the header menu.
    ///
    /// Falls back to `"AD"` (the admin placeholder) when nobody is signed in
    /// or the display name is blank.
    #[must_use]
    pub fn initials(&self) -> String {
        let Some(user) = &self.user else {
            return "AD".to_owned();
        };
        let initials: String = user
            .name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() { "AD".to_owned() } else { initials }
    }
}
