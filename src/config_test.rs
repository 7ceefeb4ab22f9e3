use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

const IDENTITY: [(&str, &str); 3] = [
    ("IDENTITY_API_KEY", "key-123"),
    ("IDENTITY_PROJECT_ID", "bereans-demo"),
    ("IDENTITY_AUTH_DOMAIN", "bereans-demo.firebaseapp.com"),
];

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "On"] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "FALSE"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_whitespace_trimmed() {
    assert_eq!(parse_bool("  yes  "), Some(true));
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// AppConfig::from_lookup
// =============================================================================

#[test]
fn empty_environment_uses_defaults() {
    let config = AppConfig::from_lookup(|_| None).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert!(config.identity.is_none());
    assert!(config.google.is_none());
    assert!(!config.cookie_secure);
}

#[test]
fn port_is_parsed() {
    let config = AppConfig::from_lookup(lookup_from(&[("PORT", "8080")])).unwrap();
    assert_eq!(config.port, 8080);
}

#[test]
fn invalid_port_is_rejected() {
    let err = AppConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { value: "eighty".into() });
}

#[test]
fn identity_group_requires_all_keys() {
    let config = AppConfig::from_lookup(lookup_from(&IDENTITY[..2])).unwrap();
    assert!(config.identity.is_none());
}

#[test]
fn identity_group_loads_with_default_base_url() {
    let config = AppConfig::from_lookup(lookup_from(&IDENTITY)).unwrap();
    let identity = config.identity.unwrap();
    assert_eq!(identity.api_key, "key-123");
    assert_eq!(identity.project_id, "bereans-demo");
    assert_eq!(identity.auth_domain, "bereans-demo.firebaseapp.com");
    assert_eq!(identity.base_url, DEFAULT_IDENTITY_BASE_URL);
}

#[test]
fn identity_base_url_override_drops_trailing_slash() {
    let mut pairs = IDENTITY.to_vec();
    pairs.push(("IDENTITY_BASE_URL", "http://localhost:9099/identitytoolkit.googleapis.com/"));
    let config = AppConfig::from_lookup(lookup_from(&pairs)).unwrap();
    assert_eq!(
        config.identity.unwrap().base_url,
        "http://localhost:9099/identitytoolkit.googleapis.com"
    );
}

#[test]
fn blank_values_count_as_missing() {
    let config = AppConfig::from_lookup(lookup_from(&[
        ("IDENTITY_API_KEY", "   "),
        ("IDENTITY_PROJECT_ID", "p"),
        ("IDENTITY_AUTH_DOMAIN", "d"),
    ]))
    .unwrap();
    assert!(config.identity.is_none());
}

#[test]
fn google_group_loads_when_complete() {
    let config = AppConfig::from_lookup(lookup_from(&[
        ("GOOGLE_CLIENT_ID", "cid"),
        ("GOOGLE_CLIENT_SECRET", "secret"),
        ("GOOGLE_REDIRECT_URI", "http://localhost:3000/auth/google/callback"),
    ]))
    .unwrap();
    let google = config.google.unwrap();
    assert_eq!(google.client_id, "cid");
    assert!(!config.cookie_secure);
}

// =============================================================================
// cookie_secure
// =============================================================================

#[test]
fn cookie_secure_follows_https_redirect() {
    let config = AppConfig::from_lookup(lookup_from(&[
        ("GOOGLE_CLIENT_ID", "cid"),
        ("GOOGLE_CLIENT_SECRET", "secret"),
        ("GOOGLE_REDIRECT_URI", "https://dash.example.com/auth/google/callback"),
    ]))
    .unwrap();
    assert!(config.cookie_secure);
}

#[test]
fn cookie_secure_explicit_flag_wins() {
    let config = AppConfig::from_lookup(lookup_from(&[
        ("COOKIE_SECURE", "off"),
        ("GOOGLE_CLIENT_ID", "cid"),
        ("GOOGLE_CLIENT_SECRET", "secret"),
        ("GOOGLE_REDIRECT_URI", "https://dash.example.com/auth/google/callback"),
    ]))
    .unwrap();
    assert!(!config.cookie_secure);

    let config = AppConfig::from_lookup(lookup_from(&[("COOKIE_SECURE", "true")])).unwrap();
    assert!(config.cookie_secure);
}

#[test]
fn cookie_secure_unparseable_flag_falls_back() {
    let config = AppConfig::from_lookup(lookup_from(&[("COOKIE_SECURE", "sometimes")])).unwrap();
    assert!(!config.cookie_secure);
}
