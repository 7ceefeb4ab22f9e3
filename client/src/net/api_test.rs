use super::*;

#[test]
fn error_message_prefers_host_error_body() {
    let body = r#"{"error":"An account with this email already exists."}"#;
    assert_eq!(error_message(400, body), "An account with this email already exists.");
}

#[test]
fn error_message_falls_back_to_status_for_non_json() {
    assert_eq!(error_message(502, "<html>bad gateway</html>"), "request failed: 502");
}

#[test]
fn error_message_ignores_blank_error_field() {
    assert_eq!(error_message(401, r#"{"error":"  "}"#), "request failed: 401");
}

#[test]
fn popup_messages_are_distinct() {
    assert_ne!(POPUP_CLOSED_MESSAGE, POPUP_BLOCKED_MESSAGE);
    assert!(FEDERATED_POPUP_PATH.starts_with('/'));
}

fn grace() -> User {
    User {
        id: "uid-2".into(),
        name: "Grace".into(),
        email: "grace@example.com".into(),
        provider: "google.com".into(),
    }
}

#[test]
fn federated_outcome_completed_popup_returns_user() {
    assert_eq!(federated_outcome(true, Some(grace())), Ok(grace()));
}

#[test]
fn federated_outcome_dismissed_popup_fails_even_with_existing_session() {
    assert_eq!(federated_outcome(false, Some(grace())), Err(POPUP_CLOSED_MESSAGE.to_owned()));
}

#[test]
fn federated_outcome_completed_without_session_fails() {
    assert_eq!(federated_outcome(true, None), Err(POPUP_CLOSED_MESSAGE.to_owned()));
}
