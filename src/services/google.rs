//! Google OAuth service: consent URL and authorization-code exchange.
//!
//! The resulting Google `id_token` is not trusted on its own; it is handed
//! to the identity platform's `signInWithIdp`, which verifies it and returns
//! the account.

pub const AUTHORIZE_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";

/// Google OAuth client settings loaded from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GoogleError {
    #[error("invalid authorize url: {0}")]
    Url(String),
    #[error("google token exchange failed: {0}")]
    TokenExchange(String),
}

#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    id_token: Option<String>,
}

impl GoogleConfig {
    /// Build the consent-screen URL carrying the CSRF `state`.
    ///
    /// # Errors
    ///
    /// Returns [`GoogleError::Url`] if the URL cannot be assembled.
    pub fn authorize_url(&self, state: &str) -> Result<String, GoogleError> {
        let url = reqwest::Url::parse_with_params(
            AUTHORIZE_ENDPOINT,
            &[
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("response_type", "code"),
                ("scope", "openid email profile"),
                ("prompt", "select_account"),
                ("state", state),
            ],
        )
        .map_err(|e| GoogleError::Url(e.to_string()))?;
        Ok(url.into())
    }
}

/// Exchange an authorization code for a Google `id_token`.
pub async fn exchange_code(client: &reqwest::Client, config: &GoogleConfig, code: &str) -> Result<String, GoogleError> {
    let resp = client
        .post(TOKEN_ENDPOINT)
        .header("Accept", "application/json")
        .form(&[
            ("code", code),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ])
        .send()
        .await
        .map_err(|e| GoogleError::TokenExchange(e.to_string()))?;

    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| GoogleError::TokenExchange(e.to_string()))?;
    if !status.is_success() {
        return Err(GoogleError::TokenExchange(format!("{status}: {body}")));
    }
    id_token_from_body(&body)
}

fn id_token_from_body(body: &str) -> Result<String, GoogleError> {
    let parsed: TokenResponse =
        serde_json::from_str(body).map_err(|_| GoogleError::TokenExchange(format!("unexpected response: {body}")))?;
    parsed
        .id_token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| GoogleError::TokenExchange("response carried no id_token".into()))
}

#[cfg(test)]
#[path = "google_test.rs"]
mod tests;
