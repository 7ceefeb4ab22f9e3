//! Auth routes: password sign-in/sign-up, Google popup flow, session lookup.
//!
//! ERROR HANDLING
//! ==============
//! Every failure answers `{"error": "<sentence>"}` so the client can show
//! the message as-is. Identity platform rejections keep their readable text;
//! transport problems become 502, missing configuration 503.

use std::sync::Arc;

use axum::extract::{FromRef, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use client::net::api::FEDERATED_RESULT_KEY;
use client::net::types::{SignInRequest, SignUpRequest, User};
use serde::Deserialize;
use time::Duration;

use crate::services::identity::{IdentityError, IdentityProvider};
use crate::services::{google, session};
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";
const OAUTH_STATE_COOKIE_NAME: &str = "oauth_state";
const NOT_CONFIGURED: &str = "Authentication is not configured on this server.";

/// Served to the Google popup when consent is declined. The opener sees the
/// window close with no result flag and reports the sign-in as abandoned.
pub(crate) const POPUP_CLOSE_PAGE: &str = "<!DOCTYPE html><html><head><title>Sign-in</title></head>\
<body><script>window.close();</script><p>You can close this window.</p></body></html>";

/// Served to the Google popup once the session cookie is set. Marks the
/// opener before closing so it can tell a finished sign-in from a dismissed
/// popup, even when an older session already exists.
pub(crate) fn popup_success_page() -> String {
    format!(
        "<!DOCTYPE html><html><head><title>Signed in</title></head><body><script>\
if (window.opener) {{ window.opener.{FEDERATED_RESULT_KEY} = true; }}\
window.close();</script><p>You can close this window.</p></body></html>"
    )
}

// =============================================================================
// API ERROR
// =============================================================================

#[derive(Debug, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "error": self.message }))).into_response()
    }
}

impl From<IdentityError> for ApiError {
    fn from(err: IdentityError) -> Self {
        let status = match &err {
            e if e.is_bad_credentials() => StatusCode::UNAUTHORIZED,
            IdentityError::Rejected { .. } => StatusCode::BAD_REQUEST,
            IdentityError::Transport(_) | IdentityError::UnexpectedResponse(_) => {
                tracing::error!(error = %err, "identity platform call failed");
                StatusCode::BAD_GATEWAY
            }
        };
        Self::new(status, err.user_message())
    }
}

fn identity(state: &AppState) -> Result<Arc<dyn IdentityProvider>, ApiError> {
    state
        .identity
        .clone()
        .ok_or_else(|| ApiError::new(StatusCode::SERVICE_UNAVAILABLE, NOT_CONFIGURED))
}

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

fn expired_cookie(name: &'static str, secure: bool) -> Cookie<'static> {
    Cookie::build((name, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

/// Replace whatever session the browser holds with a fresh one for `user`.
async fn start_session(state: &AppState, jar: CookieJar, user: User) -> (CookieJar, Json<User>) {
    if let Some(previous) = jar.get(COOKIE_NAME).map(|c| c.value().to_owned())
        && state.sessions.remove(&previous).await
    {
        tracing::debug!("previous session replaced");
    }
    let token = state.sessions.create(user.clone()).await;
    let active = state.sessions.active_count().await;
    tracing::info!(user_id = %user.id, provider = %user.provider, active, "session created");
    (jar.add(session_cookie(token, state.cookie_secure)), Json(user))
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
pub struct AuthUser {
    pub user: User,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(ApiError::new(StatusCode::UNAUTHORIZED, "Not signed in."));
        }

        let app_state = AppState::from_ref(state);
        let user = app_state
            .sessions
            .get(token)
            .await
            .ok_or_else(|| ApiError::new(StatusCode::UNAUTHORIZED, "Session expired. Please sign in again."))?;

        Ok(Self { user })
    }
}

// =============================================================================
// PASSWORD HANDLERS
// =============================================================================

/// `POST /api/auth/sign-in`: verify credentials, set the session cookie.
pub async fn sign_in(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<SignInRequest>,
) -> Result<(CookieJar, Json<User>), ApiError> {
    let provider = identity(&state)?;
    let email = req.email.trim();
    if email.is_empty() || req.password.is_empty() {
        return Err(ApiError::new(StatusCode::BAD_REQUEST, "Please fill in all fields"));
    }

    let account = provider.sign_in_with_password(email, &req.password).await?;
    Ok(start_session(&state, jar, session::user_from_account(account)).await)
}

/// `POST /api/auth/sign-up`: create the account, set the session cookie.
pub async fn sign_up(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<SignUpRequest>,
) -> Result<(CookieJar, Json<User>), ApiError> {
    let provider = identity(&state)?;
    let email = req.email.trim();
    if req.name.trim().is_empty() || email.is_empty() || req.password.is_empty() {
        return Err(ApiError::new(StatusCode::BAD_REQUEST, "Please fill in all fields"));
    }

    let account = provider.sign_up(&req.name, email, &req.password).await?;
    Ok(start_session(&state, jar, session::user_from_account(account)).await)
}

/// `GET /api/auth/me`: return the current user.
pub async fn me(auth: AuthUser) -> Json<User> {
    Json(auth.user)
}

/// `POST /api/auth/logout`: drop the session if any and clear the cookie.
///
/// Succeeds without a session so a stale tab can always sign out.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(token) = jar.get(COOKIE_NAME).map(|c| c.value().to_owned())
        && state.sessions.remove(&token).await
    {
        tracing::info!("session ended");
    }

    let jar = jar.add(expired_cookie(COOKIE_NAME, state.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}

// =============================================================================
// GOOGLE POPUP HANDLERS
// =============================================================================

/// `GET /auth/google`: redirect the popup to Google's consent screen.
pub async fn google_redirect(State(state): State<AppState>) -> Response {
    let Some(config) = &state.google else {
        return ApiError::new(StatusCode::SERVICE_UNAVAILABLE, NOT_CONFIGURED).into_response();
    };

    let oauth_state = session::generate_token();
    let url = match config.authorize_url(&oauth_state) {
        Ok(url) => url,
        Err(e) => {
            tracing::error!(error = %e, "google authorize url failed");
            return ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Google sign-in is unavailable.").into_response();
        }
    };

    let cookie = Cookie::build((OAUTH_STATE_COOKIE_NAME, oauth_state))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.cookie_secure)
        .max_age(Duration::minutes(10));

    let jar = CookieJar::new().add(cookie);
    (jar, Redirect::temporary(&url)).into_response()
}

#[derive(Deserialize)]
pub struct CallbackQuery {
    code: Option<String>,
    state: Option<String>,
    error: Option<String>,
}

/// `GET /auth/google/callback`: exchange the code, sign into the identity
/// platform, set the cookie and close the popup.
pub async fn google_callback(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<CallbackQuery>,
) -> Response {
    let Some(config) = &state.google else {
        return ApiError::new(StatusCode::SERVICE_UNAVAILABLE, NOT_CONFIGURED).into_response();
    };
    let provider = match identity(&state) {
        Ok(p) => p,
        Err(e) => return e.into_response(),
    };

    // User cancelled on the consent screen: just close the popup.
    if let Some(error) = params.error.as_deref() {
        tracing::info!(%error, "google consent declined");
        return Html(POPUP_CLOSE_PAGE).into_response();
    }

    // Verify OAuth CSRF state from cookie.
    let Some(callback_state) = params.state.as_deref() else {
        return ApiError::new(StatusCode::BAD_REQUEST, "Missing OAuth state.").into_response();
    };
    let expected_state = jar
        .get(OAUTH_STATE_COOKIE_NAME)
        .map(Cookie::value)
        .unwrap_or_default();
    if expected_state.is_empty() || expected_state != callback_state {
        return ApiError::new(StatusCode::UNAUTHORIZED, "Invalid OAuth state.").into_response();
    }
    let Some(code) = params.code.as_deref() else {
        return ApiError::new(StatusCode::BAD_REQUEST, "Missing authorization code.").into_response();
    };

    let id_token = match google::exchange_code(&state.http, config, code).await {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "google code exchange failed");
            return ApiError::new(StatusCode::BAD_GATEWAY, "Google sign-in failed.").into_response();
        }
    };

    let account = match provider.sign_in_with_idp(&id_token, &config.redirect_uri).await {
        Ok(a) => a,
        Err(e) => return ApiError::from(e).into_response(),
    };

    let (jar, _) = start_session(&state, jar, session::user_from_account(account)).await;
    let jar = jar.add(expired_cookie(OAUTH_STATE_COOKIE_NAME, state.cookie_secure));
    (jar, Html(popup_success_page())).into_response()
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
