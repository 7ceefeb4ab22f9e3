//! Connection toggles for the integrations catalogue.
//!
//! The only mutable mock entity in the app. Flipping a toggle produces the
//! notice the page shows; nothing is persisted and a reload restores the
//! initial states.

#[cfg(test)]
#[path = "integrations_test.rs"]
mod integrations_test;

use std::collections::BTreeMap;

use crate::state::toast::Notice;

/// Initial connection state per integration key.
pub const INITIAL_STATES: &[(&str, bool)] = &[
    ("slack", true),
    ("jira", true),
    ("github", false),
    ("microsoft", false),
    ("salesforce", true),
    ("aws", false),
];

/// Integration key -> connected flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegrationStates {
    states: BTreeMap<String, bool>,
}

impl Default for IntegrationStates {
    fn default() -> Self {
        Self {
            states: INITIAL_STATES
                .iter()
                .map(|(key, on)| ((*key).to_owned(), *on))
                .collect(),
        }
    }
}

impl IntegrationStates {
    /// Unknown keys read as disconnected.
    #[must_use]
    pub fn is_connected(&self, key: &str) -> bool {
        self.states.get(key).copied().unwrap_or(false)
    }

    /// Flip `key` and return the notice describing the new state.
    pub fn toggle(&mut self, key: &str, display_name: &str) -> Notice {
        let entry = self.states.entry(key.to_owned()).or_insert(false);
        *entry = !*entry;
        toggle_notice(display_name, *entry)
    }

    #[must_use]
    pub fn connected_count(&self) -> usize {
        self.states.values().filter(|on| **on).count()
    }
}

fn toggle_notice(display_name: &str, connected: bool) -> Notice {
    if connected {
        Notice::info(
            "Integration Enabled",
            format!("{display_name} integration connected successfully"),
        )
    } else {
        Notice::info(
            "Integration Disabled",
            format!("{display_name} integration disconnected successfully"),
        )
    }
}
