//! Host configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Parsing goes through a lookup function so tests can feed a map instead of
//! mutating the process environment. `AppConfig::from_env` is the production
//! entry point and simply plugs in `std::env::var`.
//!
//! Identity and Google settings are optional groups: when any required key of
//! a group is missing the group is `None` and the matching endpoints answer
//! 503 instead of the host refusing to start.

use crate::services::google::GoogleConfig;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value: {value}")]
    InvalidPort { value: String },
}

/// Hosted identity platform settings. Never shipped to the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    pub api_key: String,
    pub project_id: String,
    pub auth_domain: String,
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub identity: Option<IdentityConfig>,
    pub google: Option<GoogleConfig>,
    pub cookie_secure: bool,
}

impl AppConfig {
    /// Build the host configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is set but not a `u16`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the host configuration from an arbitrary key lookup.
    ///
    /// Required for identity: `IDENTITY_API_KEY`, `IDENTITY_PROJECT_ID`,
    /// `IDENTITY_AUTH_DOMAIN`. Optional: `IDENTITY_BASE_URL`, `PORT`,
    /// `COOKIE_SECURE`, and the `GOOGLE_*` group.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is set but not a `u16`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_empty(&lookup, "PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort { value: raw })?,
            None => DEFAULT_PORT,
        };

        let identity = identity_from_lookup(&lookup);
        let google = google_from_lookup(&lookup);

        // Explicit flag wins; otherwise follow the OAuth redirect scheme.
        let cookie_secure = lookup("COOKIE_SECURE").and_then(|raw| parse_bool(&raw)).unwrap_or_else(|| {
            google
                .as_ref()
                .is_some_and(|g| g.redirect_uri.starts_with("https://"))
        });

        Ok(Self { port, identity, google, cookie_secure })
    }
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn identity_from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Option<IdentityConfig> {
    let api_key = non_empty(lookup, "IDENTITY_API_KEY")?;
    let project_id = non_empty(lookup, "IDENTITY_PROJECT_ID")?;
    let auth_domain = non_empty(lookup, "IDENTITY_AUTH_DOMAIN")?;
    let base_url = non_empty(lookup, "IDENTITY_BASE_URL")
        .unwrap_or_else(|| DEFAULT_IDENTITY_BASE_URL.to_owned())
        .trim_end_matches('/')
        .to_owned();
    Some(IdentityConfig { api_key, project_id, auth_domain, base_url })
}

fn google_from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Option<GoogleConfig> {
    let client_id = non_empty(lookup, "GOOGLE_CLIENT_ID")?;
    let client_secret = non_empty(lookup, "GOOGLE_CLIENT_SECRET")?;
    let redirect_uri = non_empty(lookup, "GOOGLE_REDIRECT_URI")?;
    Some(GoogleConfig { client_id, client_secret, redirect_uri })
}

/// Accepts `1/true/yes/on` and `0/false/no/off`, trimmed and case-insensitive.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
