use super::*;

#[test]
fn default_states_match_catalogue() {
    let states = IntegrationStates::default();
    assert!(states.is_connected("slack"));
    assert!(states.is_connected("jira"));
    assert!(states.is_connected("salesforce"));
    assert!(!states.is_connected("github"));
    assert!(!states.is_connected("microsoft"));
    assert!(!states.is_connected("aws"));
    assert_eq!(states.connected_count(), 3);
}

#[test]
fn toggle_connected_integration_disables_it() {
    let mut states = IntegrationStates::default();
    let notice = states.toggle("slack", "Slack");
    assert!(!states.is_connected("slack"));
    assert_eq!(notice.title, "Integration Disabled");
    assert_eq!(notice.description, "Slack integration disconnected successfully");
}

#[test]
fn toggle_disconnected_integration_enables_it() {
    let mut states = IntegrationStates::default();
    let notice = states.toggle("github", "GitHub");
    assert!(states.is_connected("github"));
    assert_eq!(notice.title, "Integration Enabled");
    assert_eq!(notice.description, "GitHub integration connected successfully");
}

#[test]
fn double_toggle_restores_state() {
    let mut states = IntegrationStates::default();
    states.toggle("aws", "AWS");
    states.toggle("aws", "AWS");
    assert_eq!(states, IntegrationStates::default());
}

#[test]
fn unknown_key_reads_disconnected_and_toggles_on() {
    let mut states = IntegrationStates::default();
    assert!(!states.is_connected("zapier"));
    states.toggle("zapier", "Zapier");
    assert!(states.is_connected("zapier"));
}
