//! REST helpers for the host's auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result<_, String>` outputs instead of panics. Error
//! strings are the host's human-readable message when it sent one, so pages
//! can show them verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
use super::types::User;

/// Popup route that starts the federated (Google) sign-in.
pub const FEDERATED_POPUP_PATH: &str = "/auth/google";

/// Message used when the federated popup closes without a session.
pub const POPUP_CLOSED_MESSAGE: &str = "Sign-in popup was closed before completing.";

/// Message used when the browser refuses to open the popup.
pub const POPUP_BLOCKED_MESSAGE: &str = "Sign-in popup was blocked by the browser.";

/// Property the host's popup success page sets on `window.opener`.
pub const FEDERATED_RESULT_KEY: &str = "bereansFederatedSignIn";

#[cfg(feature = "hydrate")]
const POPUP_POLL_MS: u64 = 500;

/// Result of a closed federated popup. Only a popup that reported completion
/// counts; an existing session on its own does not.
#[cfg(any(test, feature = "hydrate"))]
fn federated_outcome(completed: bool, user: Option<User>) -> Result<User, String> {
    match (completed, user) {
        (true, Some(user)) => Ok(user),
        _ => Err(POPUP_CLOSED_MESSAGE.to_owned()),
    }
}

/// Turn a failed response into the message shown to the user.
///
/// Prefers the host's `{"error": "..."}` body; otherwise reports the status.
#[cfg(any(test, feature = "hydrate"))]
fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.error.trim().is_empty() => parsed.error,
        _ => format!("request failed: {status}"),
    }
}

#[cfg(feature = "hydrate")]
async fn read_user(resp: gloo_net::http::Response) -> Result<User, String> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(error_message(status, &body));
    }
    resp.json::<User>().await.map_err(|e| e.to_string())
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in with email and password via `POST /api/auth/sign-in`.
///
/// # Errors
///
/// Returns the host's error message, or a transport error string.
pub async fn sign_in(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::SignInRequest { email: email.to_owned(), password: password.to_owned() };
        let resp = gloo_net::http::Request::post("/api/auth/sign-in")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_user(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/auth/sign-up`.
///
/// # Errors
///
/// Returns the host's error message, or a transport error string.
pub async fn sign_up(name: &str, email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::SignUpRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post("/api/auth/sign-up")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_user(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err("not available on server".to_owned())
    }
}

/// End the current session via `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns an error string if the request fails or the host rejects it.
pub async fn logout() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(error_message(status, &body));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Run the federated sign-in in a popup window.
///
/// Suspends until the popup closes, then checks the completion flag the
/// host's success page leaves on this window and reads the new session user.
/// A dismissed popup and a provider failure both surface as the same error.
///
/// # Errors
///
/// Returns [`POPUP_BLOCKED_MESSAGE`] if the popup cannot be opened and
/// [`POPUP_CLOSED_MESSAGE`] if it closes without establishing a session.
pub async fn sign_in_with_popup() -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or_else(|| POPUP_BLOCKED_MESSAGE.to_owned())?;
        let key = wasm_bindgen::JsValue::from_str(FEDERATED_RESULT_KEY);
        let _ = js_sys::Reflect::delete_property(&window, &key);
        let popup = window
            .open_with_url_and_target_and_features(FEDERATED_POPUP_PATH, "bereans-oauth", "width=500,height=640")
            .ok()
            .flatten()
            .ok_or_else(|| POPUP_BLOCKED_MESSAGE.to_owned())?;
        loop {
            gloo_timers::future::sleep(std::time::Duration::from_millis(POPUP_POLL_MS)).await;
            if popup.closed().unwrap_or(true) {
                break;
            }
        }
        let completed = js_sys::Reflect::get(&window, &key)
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        let _ = js_sys::Reflect::delete_property(&window, &key);
        let user = if completed { fetch_current_user().await } else { None };
        federated_outcome(completed, user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(POPUP_CLOSED_MESSAGE.to_owned())
    }
}
