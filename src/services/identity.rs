//! Hosted identity platform client (Identity Toolkit REST API).
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard keeps no password store of its own. Email/password and
//! federated sign-ins are forwarded to the identity platform, and only the
//! returned account id, name and email are kept in the host's session.
//!
//! ERROR HANDLING
//! ==============
//! The platform reports failures as `{"error":{"message":"CODE : detail"}}`.
//! The code is lifted into [`IdentityError::Rejected`] and translated to a
//! sentence the login form can show verbatim. Transport and decode failures
//! are reported generically so internals never reach the browser.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::IdentityConfig;

const REQUEST_TIMEOUT_SECS: u64 = 15;
pub const PASSWORD_PROVIDER: &str = "password";
pub const GOOGLE_PROVIDER: &str = "google.com";

/// Account data returned by a successful sign-in or sign-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityAccount {
    pub local_id: String,
    pub email: String,
    pub display_name: String,
    pub provider: String,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("identity platform rejected request: {code}")]
    Rejected { code: String },
    #[error("identity transport error: {0}")]
    Transport(String),
    #[error("unexpected identity response: {0}")]
    UnexpectedResponse(String),
}

impl IdentityError {
    /// Sentence shown to the user for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { code } => friendly_message(code),
            Self::Transport(_) | Self::UnexpectedResponse(_) => {
                "The sign-in service is unavailable. Please try again.".to_owned()
            }
        }
    }

    /// Whether the failure means the supplied credentials were wrong.
    #[must_use]
    pub fn is_bad_credentials(&self) -> bool {
        matches!(
            self,
            Self::Rejected { code } if matches!(
                code.as_str(),
                "INVALID_LOGIN_CREDENTIALS" | "INVALID_PASSWORD" | "EMAIL_NOT_FOUND" | "USER_DISABLED"
            )
        )
    }
}

/// Translate an identity platform error code into a readable sentence.
#[must_use]
pub fn friendly_message(code: &str) -> String {
    let msg = match code {
        "EMAIL_EXISTS" => "An account with this email already exists.",
        "INVALID_LOGIN_CREDENTIALS" | "INVALID_PASSWORD" | "EMAIL_NOT_FOUND" => "Invalid email or password.",
        "INVALID_EMAIL" => "Please enter a valid email address.",
        "WEAK_PASSWORD" => "Password should be at least 6 characters.",
        "MISSING_PASSWORD" => "Please enter your password.",
        "USER_DISABLED" => "This account has been disabled.",
        "TOO_MANY_ATTEMPTS_TRY_LATER" => "Too many attempts. Please try again later.",
        "OPERATION_NOT_ALLOWED" => "This sign-in method is not enabled.",
        "INVALID_IDP_RESPONSE" => "Google sign-in could not be verified.",
        _ => return format!("Authentication failed ({code})."),
    };
    msg.to_owned()
}

/// Pull the error code out of an identity platform error body.
///
/// `"WEAK_PASSWORD : Password should be at least 6 characters"` yields
/// `"WEAK_PASSWORD"`.
pub(crate) fn error_code_from_body(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct Envelope {
        error: Inner,
    }
    #[derive(Deserialize)]
    struct Inner {
        message: String,
    }

    let env: Envelope = serde_json::from_str(body).ok()?;
    let code = env.error.message.split(':').next().unwrap_or_default().trim();
    (!code.is_empty()).then(|| code.to_owned())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    full_name: String,
    #[serde(default)]
    provider_id: String,
    #[serde(default)]
    id_token: String,
}

impl AccountResponse {
    fn into_account(self, fallback_provider: &str) -> IdentityAccount {
        let display_name = if self.display_name.is_empty() { self.full_name } else { self.display_name };
        let provider = if self.provider_id.is_empty() { fallback_provider.to_owned() } else { self.provider_id };
        IdentityAccount { local_id: self.local_id, email: self.email, display_name, provider }
    }
}

pub(crate) fn account_from_body(body: &str, fallback_provider: &str) -> Result<IdentityAccount, IdentityError> {
    let parsed: AccountResponse =
        serde_json::from_str(body).map_err(|e| IdentityError::UnexpectedResponse(e.to_string()))?;
    Ok(parsed.into_account(fallback_provider))
}

// =============================================================================
// PROVIDER TRAIT
// =============================================================================

/// Operations the auth routes need from an identity platform.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Verify an email/password pair.
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<IdentityAccount, IdentityError>;

    /// Create an email/password account and record its display name.
    async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<IdentityAccount, IdentityError>;

    /// Exchange a Google `id_token` for a platform account.
    async fn sign_in_with_idp(&self, google_id_token: &str, request_uri: &str)
    -> Result<IdentityAccount, IdentityError>;
}

// =============================================================================
// REST CLIENT
// =============================================================================

/// `reqwest`-backed Identity Toolkit client.
pub struct IdentityToolkitClient {
    http: reqwest::Client,
    config: IdentityConfig,
}

impl IdentityToolkitClient {
    /// # Errors
    ///
    /// Returns [`IdentityError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: IdentityConfig) -> Result<Self, IdentityError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| IdentityError::Transport(e.to_string()))?;
        Ok(Self { http, config })
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{}/v1/accounts:{method}", self.config.base_url)
    }

    async fn call(&self, method: &str, payload: &serde_json::Value) -> Result<String, IdentityError> {
        let resp = self
            .http
            .post(self.endpoint(method))
            .query(&[("key", self.config.api_key.as_str())])
            .json(payload)
            .send()
            .await
            .map_err(|e| IdentityError::Transport(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| IdentityError::Transport(e.to_string()))?;
        if status.is_success() {
            return Ok(body);
        }
        match error_code_from_body(&body) {
            Some(code) => Err(IdentityError::Rejected { code }),
            None => Err(IdentityError::UnexpectedResponse(format!("{status}: {body}"))),
        }
    }
}

#[async_trait]
impl IdentityProvider for IdentityToolkitClient {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<IdentityAccount, IdentityError> {
        let body = self
            .call(
                "signInWithPassword",
                &serde_json::json!({ "email": email, "password": password, "returnSecureToken": true }),
            )
            .await?;
        account_from_body(&body, PASSWORD_PROVIDER)
    }

    async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<IdentityAccount, IdentityError> {
        let body = self
            .call(
                "signUp",
                &serde_json::json!({ "email": email, "password": password, "returnSecureToken": true }),
            )
            .await?;
        let parsed: AccountResponse =
            serde_json::from_str(&body).map_err(|e| IdentityError::UnexpectedResponse(e.to_string()))?;

        let name = name.trim();
        if name.is_empty() {
            return Ok(parsed.into_account(PASSWORD_PROVIDER));
        }

        // The account exists at this point; a failed profile update only
        // costs the display name.
        let update = self
            .call(
                "update",
                &serde_json::json!({ "idToken": parsed.id_token, "displayName": name, "returnSecureToken": false }),
            )
            .await;
        let mut account = parsed.into_account(PASSWORD_PROVIDER);
        match update {
            Ok(_) => account.display_name = name.to_owned(),
            Err(e) => tracing::warn!(error = %e, "display name update failed"),
        }
        Ok(account)
    }

    async fn sign_in_with_idp(
        &self,
        google_id_token: &str,
        request_uri: &str,
    ) -> Result<IdentityAccount, IdentityError> {
        let post_body = format!("id_token={google_id_token}&providerId={GOOGLE_PROVIDER}");
        let body = self
            .call(
                "signInWithIdp",
                &serde_json::json!({
                    "postBody": post_body,
                    "requestUri": request_uri,
                    "returnSecureToken": true,
                    "returnIdpCredential": true,
                }),
            )
            .await?;
        account_from_body(&body, GOOGLE_PROVIDER)
    }
}

#[cfg(test)]
#[path = "identity_test.rs"]
mod tests;
