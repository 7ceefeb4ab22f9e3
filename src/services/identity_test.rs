use super::*;

// =============================================================================
// error_code_from_body
// =============================================================================

#[test]
fn error_code_plain() {
    let body = r#"{"error":{"code":400,"message":"EMAIL_EXISTS","errors":[]}}"#;
    assert_eq!(error_code_from_body(body).as_deref(), Some("EMAIL_EXISTS"));
}

#[test]
fn error_code_strips_detail_suffix() {
    let body = r#"{"error":{"code":400,"message":"WEAK_PASSWORD : Password should be at least 6 characters"}}"#;
    assert_eq!(error_code_from_body(body).as_deref(), Some("WEAK_PASSWORD"));
}

#[test]
fn error_code_missing_for_foreign_body() {
    assert_eq!(error_code_from_body("<html>bad gateway</html>"), None);
    assert_eq!(error_code_from_body(r#"{"error":{"message":""}}"#), None);
}

// =============================================================================
// friendly_message / IdentityError
// =============================================================================

#[test]
fn friendly_message_known_codes() {
    assert_eq!(friendly_message("EMAIL_EXISTS"), "An account with this email already exists.");
    assert_eq!(friendly_message("INVALID_LOGIN_CREDENTIALS"), "Invalid email or password.");
    assert_eq!(friendly_message("WEAK_PASSWORD"), "Password should be at least 6 characters.");
}

#[test]
fn friendly_message_unknown_code_names_it() {
    assert_eq!(friendly_message("QUOTA_EXCEEDED"), "Authentication failed (QUOTA_EXCEEDED).");
}

#[test]
fn transport_errors_hide_details() {
    let err = IdentityError::Transport("dns error: lookup identitytoolkit".into());
    let msg = err.user_message();
    assert!(!msg.contains("dns"));
    assert!(msg.contains("unavailable"));
}

#[test]
fn bad_credentials_classification() {
    assert!(IdentityError::Rejected { code: "INVALID_PASSWORD".into() }.is_bad_credentials());
    assert!(!IdentityError::Rejected { code: "EMAIL_EXISTS".into() }.is_bad_credentials());
    assert!(!IdentityError::Transport("x".into()).is_bad_credentials());
}

// =============================================================================
// account_from_body
// =============================================================================

#[test]
fn account_from_password_sign_in() {
    let body = r#"{
        "kind": "identitytoolkit#VerifyPasswordResponse",
        "localId": "uid-1",
        "email": "ada@example.com",
        "displayName": "Ada Lovelace",
        "idToken": "tok",
        "registered": true
    }"#;
    let account = account_from_body(body, PASSWORD_PROVIDER).unwrap();
    assert_eq!(account.local_id, "uid-1");
    assert_eq!(account.email, "ada@example.com");
    assert_eq!(account.display_name, "Ada Lovelace");
    assert_eq!(account.provider, "password");
}

#[test]
fn account_from_idp_uses_full_name_and_provider_id() {
    let body = r#"{
        "localId": "uid-2",
        "email": "grace@example.com",
        "fullName": "Grace Hopper",
        "providerId": "google.com",
        "idToken": "tok"
    }"#;
    let account = account_from_body(body, PASSWORD_PROVIDER).unwrap();
    assert_eq!(account.display_name, "Grace Hopper");
    assert_eq!(account.provider, "google.com");
}

#[test]
fn account_without_local_id_is_unexpected() {
    let err = account_from_body(r#"{"email":"x@example.com"}"#, PASSWORD_PROVIDER).unwrap_err();
    assert!(matches!(err, IdentityError::UnexpectedResponse(_)));
}

// =============================================================================
// endpoint
// =============================================================================

#[test]
fn endpoint_joins_base_url_and_method() {
    let client = IdentityToolkitClient::new(IdentityConfig {
        api_key: "k".into(),
        project_id: "p".into(),
        auth_domain: "d".into(),
        base_url: "http://localhost:9099/identitytoolkit.googleapis.com".into(),
    })
    .unwrap();
    assert_eq!(
        client.endpoint("signUp"),
        "http://localhost:9099/identitytoolkit.googleapis.com/v1/accounts:signUp"
    );
}
