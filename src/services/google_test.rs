use super::*;

fn config() -> GoogleConfig {
    GoogleConfig {
        client_id: "cid.apps.googleusercontent.com".into(),
        client_secret: "secret".into(),
        redirect_uri: "http://localhost:3000/auth/google/callback".into(),
    }
}

// =============================================================================
// authorize_url
// =============================================================================

#[test]
fn authorize_url_targets_google_consent() {
    let url = config().authorize_url("abc123").unwrap();
    assert!(url.starts_with(AUTHORIZE_ENDPOINT));
}

#[test]
fn authorize_url_carries_client_and_state() {
    let url = reqwest::Url::parse(&config().authorize_url("abc123").unwrap()).unwrap();
    let params: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    let get = |k: &str| params.iter().find(|(key, _)| key == k).map(|(_, v)| v.clone());

    assert_eq!(get("client_id").as_deref(), Some("cid.apps.googleusercontent.com"));
    assert_eq!(get("state").as_deref(), Some("abc123"));
    assert_eq!(get("response_type").as_deref(), Some("code"));
    assert_eq!(get("scope").as_deref(), Some("openid email profile"));
}

#[test]
fn authorize_url_encodes_redirect_uri() {
    let url = config().authorize_url("s").unwrap();
    assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fauth%2Fgoogle%2Fcallback"));
}

// =============================================================================
// id_token_from_body
// =============================================================================

#[test]
fn id_token_extracted() {
    let body = r#"{"access_token":"ya29","id_token":"eyJ.abc.def","expires_in":3599}"#;
    assert_eq!(id_token_from_body(body).unwrap(), "eyJ.abc.def");
}

#[test]
fn missing_id_token_is_error() {
    let err = id_token_from_body(r#"{"access_token":"ya29"}"#).unwrap_err();
    assert!(err.to_string().contains("no id_token"));
}

#[test]
fn non_json_body_is_error() {
    let err = id_token_from_body("<html>oops</html>").unwrap_err();
    assert!(err.to_string().contains("unexpected response"));
}
