use std::sync::Mutex;

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{Request, header};

use super::*;
use crate::services::identity::{IdentityAccount, PASSWORD_PROVIDER};

// =============================================================================
// FAKE IDENTITY PROVIDER
// =============================================================================

#[derive(Default)]
struct FakeIdentity {
    fail_with: Option<IdentityError>,
    calls: Mutex<Vec<String>>,
}

impl FakeIdentity {
    fn failing(err: IdentityError) -> Self {
        Self { fail_with: Some(err), calls: Mutex::new(Vec::new()) }
    }

    fn respond(&self, call: String, email: &str, name: &str, provider: &str) -> Result<IdentityAccount, IdentityError> {
        self.calls.lock().unwrap().push(call);
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        Ok(IdentityAccount {
            local_id: format!("uid-{email}"),
            email: email.to_owned(),
            display_name: name.to_owned(),
            provider: provider.to_owned(),
        })
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentity {
    async fn sign_in_with_password(&self, email: &str, _password: &str) -> Result<IdentityAccount, IdentityError> {
        self.respond(format!("sign_in:{email}"), email, "Ada", PASSWORD_PROVIDER)
    }

    async fn sign_up(&self, name: &str, email: &str, _password: &str) -> Result<IdentityAccount, IdentityError> {
        self.respond(format!("sign_up:{email}"), email, name, PASSWORD_PROVIDER)
    }

    async fn sign_in_with_idp(&self, token: &str, _request_uri: &str) -> Result<IdentityAccount, IdentityError> {
        self.respond(format!("idp:{token}"), "g@example.com", "Grace", "google.com")
    }
}

fn state_with(fake: FakeIdentity) -> (AppState, Arc<FakeIdentity>) {
    let fake = Arc::new(fake);
    let state = AppState::new(Some(fake.clone() as Arc<dyn IdentityProvider>), None, false);
    (state, fake)
}

fn sign_in_req(email: &str, password: &str) -> Json<SignInRequest> {
    Json(SignInRequest { email: email.into(), password: password.into() })
}

fn session_token_from(jar: &CookieJar) -> String {
    jar.get(COOKIE_NAME).map(|c| c.value().to_owned()).unwrap_or_default()
}

async fn body_json(resp: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// ApiError
// =============================================================================

#[tokio::test]
async fn api_error_renders_error_body() {
    let resp = ApiError::new(StatusCode::BAD_REQUEST, "nope").into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await, serde_json::json!({ "error": "nope" }));
}

#[test]
fn identity_errors_map_to_statuses() {
    let bad = ApiError::from(IdentityError::Rejected { code: "INVALID_LOGIN_CREDENTIALS".into() });
    assert_eq!(bad.status, StatusCode::UNAUTHORIZED);
    assert_eq!(bad.message, "Invalid email or password.");

    let exists = ApiError::from(IdentityError::Rejected { code: "EMAIL_EXISTS".into() });
    assert_eq!(exists.status, StatusCode::BAD_REQUEST);

    let down = ApiError::from(IdentityError::Transport("timeout".into()));
    assert_eq!(down.status, StatusCode::BAD_GATEWAY);
}

// =============================================================================
// sign_in / sign_up
// =============================================================================

#[tokio::test]
async fn sign_in_sets_cookie_and_creates_session() {
    let (state, fake) = state_with(FakeIdentity::default());
    let (jar, Json(user)) = sign_in(State(state.clone()), CookieJar::new(), sign_in_req(" ada@example.com ", "pw"))
        .await
        .unwrap();

    assert_eq!(user.email, "ada@example.com");
    assert_eq!(fake.calls.lock().unwrap().as_slice(), ["sign_in:ada@example.com"]);

    let token = session_token_from(&jar);
    assert_eq!(token.len(), 64);
    assert_eq!(state.sessions.get(&token).await, Some(user));
}

#[tokio::test]
async fn repeat_sign_in_replaces_previous_session() {
    let (state, _) = state_with(FakeIdentity::default());
    let (first_jar, _) = sign_in(State(state.clone()), CookieJar::new(), sign_in_req("ada@example.com", "pw"))
        .await
        .unwrap();
    let first = session_token_from(&first_jar);

    let (second_jar, _) = sign_in(State(state.clone()), first_jar, sign_in_req("ada@example.com", "pw"))
        .await
        .unwrap();
    let second = session_token_from(&second_jar);

    assert_ne!(first, second);
    assert_eq!(state.sessions.get(&first).await, None);
    assert!(state.sessions.get(&second).await.is_some());
    assert_eq!(state.sessions.active_count().await, 1);
}

#[tokio::test]
async fn sign_up_with_stale_cookie_still_starts_session() {
    let (state, _) = state_with(FakeIdentity::default());
    let jar = CookieJar::new().add(Cookie::new(COOKIE_NAME, "expired-token"));
    let req = Json(SignUpRequest { name: "Ada".into(), email: "ada@example.com".into(), password: "pw".into() });

    let (jar, _) = sign_up(State(state.clone()), jar, req).await.unwrap();
    assert_ne!(session_token_from(&jar), "expired-token");
    assert_eq!(state.sessions.active_count().await, 1);
}

#[tokio::test]
async fn sign_in_blank_fields_never_reach_provider() {
    let (state, fake) = state_with(FakeIdentity::default());
    let err = sign_in(State(state), CookieJar::new(), sign_in_req("  ", "pw")).await.unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
    assert!(fake.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn sign_in_rejection_passes_readable_message() {
    let (state, _) = state_with(FakeIdentity::failing(IdentityError::Rejected {
        code: "INVALID_LOGIN_CREDENTIALS".into(),
    }));
    let err = sign_in(State(state.clone()), CookieJar::new(), sign_in_req("a@b.c", "bad"))
        .await
        .unwrap_err();
    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    assert_eq!(err.message, "Invalid email or password.");
    assert_eq!(state.sessions.active_count().await, 0);
}

#[tokio::test]
async fn sign_in_without_identity_is_unavailable() {
    let state = AppState::new(None, None, false);
    let err = sign_in(State(state), CookieJar::new(), sign_in_req("a@b.c", "pw")).await.unwrap_err();
    assert_eq!(err.status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn sign_up_returns_named_user() {
    let (state, fake) = state_with(FakeIdentity::default());
    let req = SignUpRequest { name: "Ada Lovelace".into(), email: "ada@example.com".into(), password: "pw1234".into() };
    let (jar, Json(user)) = sign_up(State(state), CookieJar::new(), Json(req)).await.unwrap();

    assert_eq!(user.name, "Ada Lovelace");
    assert_eq!(user.provider, "password");
    assert!(!session_token_from(&jar).is_empty());
    assert_eq!(fake.calls.lock().unwrap().as_slice(), ["sign_up:ada@example.com"]);
}

#[tokio::test]
async fn sign_up_existing_email_is_bad_request() {
    let (state, _) = state_with(FakeIdentity::failing(IdentityError::Rejected { code: "EMAIL_EXISTS".into() }));
    let req = SignUpRequest { name: "Ada".into(), email: "ada@example.com".into(), password: "pw1234".into() };
    let err = sign_up(State(state), CookieJar::new(), Json(req)).await.unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
    assert_eq!(err.message, "An account with this email already exists.");
}

// =============================================================================
// AuthUser / me / logout
// =============================================================================

fn parts_with_cookie(cookie: Option<&str>) -> axum::http::request::Parts {
    let mut builder = Request::builder().uri("/api/auth/me");
    if let Some(c) = cookie {
        builder = builder.header(header::COOKIE, c);
    }
    builder.body(()).unwrap().into_parts().0
}

#[tokio::test]
async fn auth_user_resolves_session_cookie() {
    let (state, _) = state_with(FakeIdentity::default());
    let (jar, Json(user)) = sign_in(State(state.clone()), CookieJar::new(), sign_in_req("ada@example.com", "pw"))
        .await
        .unwrap();
    let cookie = format!("{COOKIE_NAME}={}", session_token_from(&jar));

    let mut parts = parts_with_cookie(Some(&cookie));
    let auth = AuthUser::from_request_parts(&mut parts, &state).await.unwrap();
    let Json(me_user) = me(auth).await;
    assert_eq!(me_user, user);
}

#[tokio::test]
async fn auth_user_without_cookie_is_unauthorized() {
    let (state, _) = state_with(FakeIdentity::default());
    let mut parts = parts_with_cookie(None);
    let Err(err) = AuthUser::from_request_parts(&mut parts, &state).await else {
        panic!("expected rejection");
    };
    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn auth_user_unknown_token_is_unauthorized() {
    let (state, _) = state_with(FakeIdentity::default());
    let mut parts = parts_with_cookie(Some("session_token=deadbeef"));
    let Err(err) = AuthUser::from_request_parts(&mut parts, &state).await else {
        panic!("expected rejection");
    };
    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_removes_session_and_expires_cookie() {
    let (state, _) = state_with(FakeIdentity::default());
    let (jar, _) = sign_in(State(state.clone()), CookieJar::new(), sign_in_req("ada@example.com", "pw"))
        .await
        .unwrap();
    let token = session_token_from(&jar);

    let resp = logout(State(state.clone()), jar).await.into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let set_cookie = resp.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
    assert!(set_cookie.starts_with("session_token=;"));
    assert!(set_cookie.contains("Max-Age=0"));
    assert_eq!(state.sessions.get(&token).await, None);
}

#[tokio::test]
async fn logout_without_session_still_succeeds() {
    let state = AppState::new(None, None, false);
    let resp = logout(State(state), CookieJar::new()).await.into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

// =============================================================================
// Google popup
// =============================================================================

fn google_config() -> google::GoogleConfig {
    google::GoogleConfig {
        client_id: "cid".into(),
        client_secret: "secret".into(),
        redirect_uri: "http://localhost:3000/auth/google/callback".into(),
    }
}

#[tokio::test]
async fn google_redirect_without_config_is_unavailable() {
    let state = AppState::new(None, None, false);
    let resp = google_redirect(State(state)).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn google_redirect_sets_state_cookie() {
    let state = AppState::new(None, Some(google_config()), false);
    let resp = google_redirect(State(state)).await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let location = resp.headers().get(header::LOCATION).unwrap().to_str().unwrap();
    assert!(location.starts_with(google::AUTHORIZE_ENDPOINT));
    let set_cookie = resp.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
    assert!(set_cookie.starts_with("oauth_state="));
}

fn callback(code: Option<&str>, state: Option<&str>, error: Option<&str>) -> Query<CallbackQuery> {
    Query(CallbackQuery {
        code: code.map(str::to_owned),
        state: state.map(str::to_owned),
        error: error.map(str::to_owned),
    })
}

#[tokio::test]
async fn google_callback_rejects_mismatched_state() {
    let fake = Arc::new(FakeIdentity::default());
    let state = AppState::new(Some(fake.clone() as Arc<dyn IdentityProvider>), Some(google_config()), false);
    let jar = CookieJar::new().add(Cookie::new(OAUTH_STATE_COOKIE_NAME, "expected"));

    let resp = google_callback(State(state), jar, callback(Some("code"), Some("forged"), None)).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(fake.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn google_callback_missing_state_is_bad_request() {
    let (mut state, _) = state_with(FakeIdentity::default());
    state.google = Some(google_config());
    let resp = google_callback(State(state), CookieJar::new(), callback(Some("code"), None, None)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn google_callback_consent_declined_closes_popup() {
    let (mut state, _) = state_with(FakeIdentity::default());
    state.google = Some(google_config());
    let resp = google_callback(State(state.clone()), CookieJar::new(), callback(None, None, Some("access_denied"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(state.sessions.active_count().await, 0);
}

#[tokio::test]
async fn google_callback_without_identity_is_unavailable() {
    let state = AppState::new(None, Some(google_config()), false);
    let resp = google_callback(State(state), CookieJar::new(), callback(Some("c"), Some("s"), None)).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[test]
fn success_page_flags_opener_before_closing() {
    let page = popup_success_page();
    assert!(page.contains(&format!("window.opener.{FEDERATED_RESULT_KEY} = true")));
    assert!(page.contains("window.close()"));
}

#[test]
fn declined_page_leaves_opener_unflagged() {
    assert!(!POPUP_CLOSE_PAGE.contains(FEDERATED_RESULT_KEY));
    assert!(POPUP_CLOSE_PAGE.contains("window.close()"));
}
